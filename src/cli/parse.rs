use medrec_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a result limit; zero is rejected
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    let limit: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer", s))?;
    if limit == 0 {
        return Err("limit must be at least 1".to_string());
    }
    Ok(limit)
}
