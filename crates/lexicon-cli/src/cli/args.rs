//! Value parsers for repeatable `NAME=...` arguments.

/// Parse `name=v1,v2` into a component name and its candidate values.
/// `name=` gives an empty value list.
pub fn parse_component(s: &str) -> Result<(String, Vec<String>), String> {
    let (name, values) = split_assignment(s)?;
    let values = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    Ok((name, values))
}

/// Parse `name=value` into a component selection.
pub fn parse_selection(s: &str) -> Result<(String, String), String> {
    let (name, value) = split_assignment(s)?;
    Ok((name, value.to_string()))
}

fn split_assignment(s: &str) -> Result<(String, &str), String> {
    let (name, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing component name in `{s}`"));
    }
    Ok((name.to_string(), rest))
}
