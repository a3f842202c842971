use std::io::{self, Write};

use anyhow::Error;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(template_err) = err.downcast_ref::<lt_forge::TemplateError>() {
        collect_template_hints(template_err, &mut hints);
    } else if let Some(io_err) = err.downcast_ref::<lt_forge::io::Error>() {
        collect_io_hints(io_err, &mut hints);
    } else {
        collect_fallback_hints(err, &mut hints);
    }

    if hints.is_empty() { None } else { Some(hints) }
}

fn collect_template_hints(err: &lt_forge::TemplateError, hints: &mut Vec<String>) {
    use lt_forge::TemplateError;

    match err {
        TemplateError::LibraryParse(_) => {
            hints.push("Template library file has invalid TOML syntax".into());
            hints.push("Check for missing quotes, brackets, or invalid values".into());
        }

        TemplateError::UnknownTemplate { available, .. } => {
            hints.push(format!("Templates in this library: {}", available));
            hints.push("Select one with --name, or point --library at another file".into());
        }

        TemplateError::EmptyTemplate { template } => {
            hints.push(format!("Template '{}' declares no [[sites]] entries", template));
            hints.push("Every template needs at least one atom row".into());
        }

        TemplateError::DuplicateSiteId { .. } => {
            hints.push("Each site id must be unique within its template".into());
            hints.push("Rename the repeated id in the library file".into());
        }

        TemplateError::MissingMass { type_tag, .. } => {
            hints.push(format!("Add '{}' to the template's [masses] table", type_tag));
        }

        TemplateError::EmptyGroup { name, .. } => {
            hints.push(format!("Group '{}' has an empty 'types' list", name));
            hints.push("A group directive must select at least one atom type".into());
        }

        TemplateError::UnknownType { type_tag, context, .. } => {
            hints.push(format!(
                "The {} entry references type '{}' but no site uses it",
                context, type_tag
            ));
            hints.push("Type tags must match a site's 'type' field exactly".into());
        }

        TemplateError::NonFinite { .. } => {
            hints.push("Charges, positions, masses, and coefficients must be finite".into());
            hints.push("Look for NaN or inf values in the library file".into());
        }

        TemplateError::ZeroCopies => {
            hints.push("Use --copies with a value of at least 1".into());
        }
    }
}

fn collect_io_hints(err: &lt_forge::io::Error, hints: &mut Vec<String>) {
    use lt_forge::io::Error as IoError;

    match err {
        IoError::Io { source } => match source.kind() {
            io::ErrorKind::NotFound => {
                hints.push("File or directory not found".into());
                hints.push("Check the path spelling and ensure the file exists".into());
            }
            io::ErrorKind::PermissionDenied => {
                hints.push("Permission denied accessing the file".into());
                hints.push("Check file permissions with `ls -la`".into());
            }
            io::ErrorKind::BrokenPipe => {
                hints.push("Broken pipe: output consumer terminated".into());
                hints.push("This may occur when piping to commands like `head`".into());
            }
            _ => {
                hints.push("I/O operation failed".into());
                hints.push("Check file path, permissions, and disk space".into());
            }
        },

        IoError::UnsupportedWriteFormat(fmt) => {
            hints.push(format!("The '{}' format cannot be used here", fmt));
            hints.push("Use --outfmt data or --outfmt settings".into());
        }

        IoError::Inconsistent(_) => {
            hints.push("The fragment references ids outside its type table".into());
            hints.push("This may indicate a bug if the fragment came from instantiate".into());
        }
    }
}

fn collect_fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let msg = err.to_string().to_lowercase();

    if msg.contains("no such file") || msg.contains("not found") {
        hints.push("Check that the file path is correct".into());
        hints.push("Verify the file exists and is readable".into());
    } else if msg.contains("permission denied") {
        hints.push("Check file permissions with `ls -la`".into());
    } else if msg.contains("infer") || msg.contains("extension") {
        hints.push("Use --outfmt to name the output format explicitly".into());
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_text() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_long_text() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn unsupported_format_hint_names_the_outfmt_flag() {
        use lt_forge::io::{Error as IoError, Format};

        let err = anyhow::Error::new(IoError::UnsupportedWriteFormat(Format::Lt));
        let hints = collect_hints(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains("--outfmt")));
    }

    #[test]
    fn unknown_template_hint_lists_names() {
        let err = anyhow::Error::new(lt_forge::TemplateError::UnknownTemplate {
            name: "Lipid".into(),
            available: "Solvent".into(),
        });
        let hints = collect_hints(&err).unwrap();
        assert!(hints[0].contains("Solvent"));
    }
}
