use regex::Regex;

/// Masks the password in a connection URL so it can be logged.
pub fn sanitize_url(connection_string: &str) -> String {
    let re = Regex::new(r"^(?P<prefix>[a-zA-Z][a-zA-Z0-9+.-]*://[^:/@]*:)[^@]*@").unwrap();
    re.replace(connection_string, "${prefix}****@").to_string()
}

/// Removes the password from a driver error message, which some drivers
/// echo back verbatim.
pub fn sanitize_connection_error(connection_string: &str, message: &str) -> String {
    match extract_password(connection_string) {
        Some(password) if !password.is_empty() => message.replace(&password, "****"),
        _ => message.to_string(),
    }
}

fn extract_password(connection_string: &str) -> Option<String> {
    let re = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^:/@]*:(?P<password>[^@]*)@").unwrap();
    re.captures(connection_string)
        .map(|caps| caps["password"].to_string())
}
