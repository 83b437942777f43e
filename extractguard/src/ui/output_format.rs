// extractguard/src/ui/output_format.rs
//! Prefixed, optionally colored status messages for stderr.

use std::io::{self, Write};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("{}{}", prefix, msg), entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, ThemeEntry::Error, theme_map, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn test_plain_prefixes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_info_message(&mut out, "scored 3 fields", &theme, false).unwrap();
        print_warn_message(&mut out, "risk is high", &theme, false).unwrap();
        print_error_message(&mut out, "bad input", &theme, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "scored 3 fields\nWarning: risk is high\nError: bad input\n");
    }
}
