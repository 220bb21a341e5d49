use std::ffi::{OsStr, OsString};

pub const QUOTE: char = '"';

/// Wrap `arg` in one pair of double quotes.
///
/// The interpreter re-parses its command line, so each forwarded argument is
/// quoted to survive that pass as a single argument. Embedded quotes and
/// backslashes are not escaped: an argument containing `"` will not round-trip.
/// Use [`has_embedded_quote`] to detect such arguments.
pub fn requote(arg: &OsStr) -> OsString {
    let mut quoted = OsString::with_capacity(arg.len() + 2);
    quoted.push("\"");
    quoted.push(arg);
    quoted.push("\"");
    quoted
}

/// Re-quote every argument, preserving order.
pub fn requote_all<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().map(|arg| requote(arg.as_ref())).collect()
}

/// Whether `arg` contains a quote character that [`requote`] cannot represent.
pub fn has_embedded_quote(arg: &OsStr) -> bool {
    arg.to_string_lossy().contains(QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(args: &[&str]) -> Vec<String> {
        requote_all(args)
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_wraps_each_argument() {
        assert_eq!(
            quoted(&["-e", "println(1 + 1)", "a b"]),
            vec!["\"-e\"", "\"println(1 + 1)\"", "\"a b\""]
        );
    }

    #[test]
    fn test_empty_argument_becomes_pair_of_quotes() {
        assert_eq!(quoted(&[""]), vec!["\"\""]);
    }

    #[test]
    fn test_no_arguments() {
        assert!(quoted(&[]).is_empty());
    }

    #[test]
    fn test_count_and_order_preserved() {
        let args: Vec<String> = (0..17).map(|i| format!("arg{i}")).collect();
        let out = quoted(&args.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(out.len(), args.len());
        for (orig, q) in args.iter().zip(&out) {
            assert_eq!(q, &format!("\"{orig}\""));
        }
    }

    // Known limitation: embedded quotes and trailing backslashes pass through
    // unescaped, so the interpreter will split or merge these arguments.
    #[test]
    fn test_embedded_quote_is_not_escaped() {
        let arg = OsStr::new(r#"say "hi""#);
        assert!(has_embedded_quote(arg));
        assert_eq!(requote(arg), OsString::from(r#""say "hi"""#));
    }

    #[test]
    fn test_trailing_backslash_is_not_escaped() {
        let arg = OsStr::new(r"C:\dir\");
        assert!(!has_embedded_quote(arg));
        assert_eq!(requote(arg), OsString::from(r#""C:\dir\""#));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_argument_is_forwarded_intact() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};
        let arg = OsStr::from_bytes(b"caf\xe9");
        assert_eq!(requote(arg).into_vec(), b"\"caf\xe9\"".to_vec());
    }
}
