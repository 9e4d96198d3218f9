use crate::error::MetricError;

/// True for a document the source answered with nothing useful: zero bytes
/// or the literal `null`. Such documents are reported healthy.
pub fn is_vacant(document: &str) -> bool {
    document.is_empty() || document == "null"
}

/// Finds the first `<name> <value>` sample in a line-oriented metrics
/// document and returns its integer value.
///
/// The name is matched case-insensitively and must be followed by a space,
/// so `foo` never matches a `foo_total` sample. Scanning stops at the first
/// matching line: if that line is not exactly two tokens it is an error,
/// even when a later line would have been well formed.
pub fn extract_metric(document: &str, name: &str) -> Result<i64, MetricError> {
    if is_vacant(document) {
        return Ok(0);
    }

    let prefix = format!("{} ", name.to_lowercase());

    for line in document.lines() {
        let line = line.trim();
        if !line.to_lowercase().starts_with(&prefix) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(MetricError::MalformedLine {
                name: name.to_string(),
                line: line.to_string(),
            });
        }

        return fields[1].parse::<i64>().map_err(|_| MetricError::Parse {
            name: name.to_string(),
            line: line.to_string(),
        });
    }

    Err(MetricError::NotFound(name.to_string()))
}
