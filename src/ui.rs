// UI layer: console output for an upload run. A spinner names the resource
// in flight; once everything is posted each result is printed as its type,
// the pretty-printed outcome and a separator line.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::api::UploadResult;

/// Separator printed after each result.
pub const SEPARATOR: &str = "---------------------------";

/// Spinner shown while uploads are in progress, drawn through `progress` so
/// the logger can suspend it.
pub fn upload_spinner(progress: &MultiProgress) -> ProgressBar {
    let spinner = progress.add(ProgressBar::new_spinner());
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Render the results in upload order.
pub fn write_results<W: Write>(out: &mut W, results: &[UploadResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", result.resource_type)?;
        let value = result.outcome.to_value();
        let pretty = serde_json::to_string_pretty(&value).map_err(io::Error::from)?;
        writeln!(out, "{}", pretty)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}

/// Print the results to stdout.
pub fn print_results(results: &[UploadResult]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Outcome;
    use serde_json::json;

    #[test]
    fn separator_is_27_dashes() {
        assert_eq!(SEPARATOR.len(), 27);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn results_render_type_value_and_separator() {
        let results = vec![
            UploadResult {
                resource_type: "Patient".into(),
                outcome: Outcome::Id("123".into()),
            },
            UploadResult {
                resource_type: "Encounter".into(),
                outcome: Outcome::Issue(json!({"text": "bad"})),
            },
        ];
        let mut buf = Vec::new();
        write_results(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let expected = format!(
            "Patient\n\"123\"\n{sep}\nEncounter\n{{\n  \"text\": \"bad\"\n}}\n{sep}\n",
            sep = SEPARATOR
        );
        assert_eq!(text, expected);
    }
}
