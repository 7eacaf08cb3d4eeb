use super::{input_error, json_pretty, EXIT_SUCCESS};
use faicons_schema::resolve_icon;

pub fn run(descriptor: &str, style: Option<&str>, json: bool) -> Result<u8, String> {
    let resolved = resolve_icon(descriptor, style).map_err(|e| input_error(&e))?;
    if json {
        let payload = serde_json::json!({
            "style": resolved.style.as_str(),
            "token": resolved.token.as_str(),
            "icon": resolved.to_string(),
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{resolved}");
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faicons_schema::ResolveError;

    #[test]
    fn blank_descriptor_maps_to_input_error() {
        let err = run("   ", None, false).unwrap_err();
        assert_eq!(err, input_error(&ResolveError::EmptyDescriptor));
    }

    #[test]
    fn valid_descriptor_succeeds() {
        assert_eq!(run("fas fa-star", None, true).unwrap(), EXIT_SUCCESS);
    }
}
