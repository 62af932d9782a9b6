use std::io::Write;

/// バイト列を `0,255,16` のような10進のカンマ区切りに変換する。
pub fn render_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// `<name> := []byte{...}` の1行を書き出す。name はそのまま埋め込まれる。
pub fn write_declaration<W: Write>(mut wtr: W, name: &str, bytes: &[u8]) -> std::io::Result<()> {
    writeln!(wtr, "{} := []byte{{{}}}", name, render_bytes(bytes))
}

pub fn write_header<W: Write>(mut wtr: W, package: &str) -> std::io::Result<()> {
    writeln!(wtr, "package {}", package)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_unsigned() {
        assert_eq!(render_bytes(&[0, 255, 16]), "0,255,16");
        assert_eq!(render_bytes(&[0x80]), "128");
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_bytes(&[]), "");
    }

    #[test]
    fn declaration_line() {
        let mut buf = Vec::<u8>::new();
        write_declaration(&mut buf, "icon", &[0, 255, 16]).unwrap();
        assert_eq!(buf, b"icon := []byte{0,255,16}\n");

        let mut buf = Vec::<u8>::new();
        write_declaration(&mut buf, "x", &[]).unwrap();
        assert_eq!(buf, b"x := []byte{}\n");
    }

    #[test]
    fn header_line() {
        let mut buf = Vec::<u8>::new();
        write_header(&mut buf, "assets").unwrap();
        assert_eq!(buf, b"package assets\n");
    }
}
