use crate::invite::validate_email;

/// Prints one line per address. Fails when any address is invalid so the
/// exit status can be scripted against.
pub fn cmd_check_email(args: &[String]) -> Result<String, String> {
    if args.is_empty() {
        return Err("usage: check-email <email>...".to_string());
    }
    let mut invalid = 0;
    let lines: Vec<String> = args
        .iter()
        .map(|email| match validate_email(email) {
            Ok(()) => format!("{email}: ok"),
            Err(err) => {
                invalid += 1;
                format!("{email}: {err}")
            }
        })
        .collect();
    let output = lines.join("\n");
    if invalid > 0 {
        return Err(output);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_email_reports_each_address() {
        let ok = cmd_check_email(&["a@b.co".to_string()]).expect("valid");
        assert_eq!(ok, "a@b.co: ok");

        let err = cmd_check_email(&["a@b.co".to_string(), "a@b".to_string(), String::new()])
            .expect_err("invalid addresses");
        assert_eq!(
            err,
            "a@b.co: ok\na@b: Invalid email format\n: Email is required"
        );
    }
}
