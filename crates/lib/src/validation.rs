//! Option validation shared by commands.

use reqwest::Url;

/// Host suffixes of SharePoint Online clouds.
const SHAREPOINT_HOST_SUFFIXES: &[&str] = &[".sharepoint.com", ".sharepoint.us", ".sharepoint.de", ".sharepoint.cn"];

/// Whether `value` is a GUID in 8-4-4-4-12 hex form.
pub fn is_valid_guid(value: &str) -> bool {
  let groups: Vec<&str> = value.split('-').collect();
  let lengths = [8, 4, 4, 4, 12];

  groups.len() == lengths.len()
    && groups
      .iter()
      .zip(lengths)
      .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Whether `value` is an absolute `https` URL pointing at SharePoint Online.
pub fn is_valid_sharepoint_url(value: &str) -> bool {
  let Ok(url) = Url::parse(value) else {
    return false;
  };

  if url.scheme() != "https" {
    return false;
  }

  url
    .host_str()
    .map(|host| {
      let host = host.to_ascii_lowercase();
      SHAREPOINT_HOST_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
    })
    .unwrap_or(false)
}

/// Split a comma-separated list, trimming each item.
pub fn split_list(value: &str) -> Vec<String> {
  value.split(',').map(|item| item.trim().to_string()).collect()
}

/// Check that every item of a comma-separated list looks like a user principal name.
pub fn validate_upns(value: &str) -> Result<Vec<String>, String> {
  let upns = split_list(value);
  match upns.iter().find(|upn| !upn.contains('@')) {
    Some(invalid) => Err(format!("{} is not a valid userPrincipalName", invalid)),
    None => Ok(upns),
  }
}

/// Parse the leading integer of `value`, ignoring anything after it.
///
/// `" 12abc"` gives `12`, `"-3.5"` gives `-3`, `"abc"` gives `None`.
pub fn parse_leading_int(value: &str) -> Option<i64> {
  let value = value.trim_start();
  let (sign, digits) = match value.as_bytes().first() {
    Some(b'-') => (-1, &value[1..]),
    Some(b'+') => (1, &value[1..]),
    _ => (1, value),
  };

  let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
  if end == 0 {
    return None;
  }

  digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
