//! Rendering of a [Document] back into unit file text.
use crate::{
    document::{Document, Section},
    value::Value,
};
use std::fmt::{self, Write};

/// Renders `doc` as unit file text.
///
/// Sections and keys come out in document order, each section followed by a blank
/// line. Booleans are written as `yes`/`no`, and a list writes one `Key=` line per
/// element. The result is trimmed, so it neither starts nor ends with a blank line.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for (name, section) in doc.sections() {
        // writing into a String does not fail
        let _ = write_section(&mut out, name, section);
    }
    out.trim().to_string()
}

/// Writes one section, header included, followed by a blank line.
pub fn write_section<W: Write>(w: &mut W, name: &str, section: &Section) -> fmt::Result {
    writeln!(w, "[{}]", name)?;
    for (key, value) in section {
        write_entry(w, key, value)?;
    }
    writeln!(w)
}

fn write_entry<W: Write>(w: &mut W, key: &str, value: &Value) -> fmt::Result {
    match value {
        Value::Bool(true) => writeln!(w, "{}=yes", key),
        Value::Bool(false) => writeln!(w, "{}=no", key),
        Value::Number(n) => writeln!(w, "{}={}", key, n),
        Value::String(s) => writeln!(w, "{}={}", key, s),
        Value::StringList(list) => {
            for item in list {
                writeln!(w, "{}={}", key, item)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::parse, value::Number};

    #[test]
    fn test_serialize_example() {
        let mut doc = Document::new();
        doc.set("Unit", "Description", "deployer");
        doc.set("Unit", "After", "network.target");
        doc.set(
            "Service",
            "ExecPreStart",
            vec![
                "/opt/d/agent start-1".to_string(),
                "/opt/d/agent start-2".to_string(),
            ],
        );
        doc.set("Service", "PrivateTmp", true);
        doc.set("Service", "RemainAfterExit", false);
        doc.set("Service", "TimeoutSec", 90u32);
        doc.set("Service", "Nice", Number::parse("-2.50").unwrap());

        assert_eq!(
            serialize(&doc),
            "[Unit]
Description=deployer
After=network.target

[Service]
ExecPreStart=/opt/d/agent start-1
ExecPreStart=/opt/d/agent start-2
PrivateTmp=yes
RemainAfterExit=no
TimeoutSec=90
Nice=-2.50"
        );
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&Document::new()), "");

        let mut doc = Document::new();
        doc.add_section("A");
        assert_eq!(serialize(&doc), "[A]");
        doc.set("B", "Key", "v");
        assert_eq!(serialize(&doc), "[A]\n\n[B]\nKey=v");
    }

    #[test]
    fn test_serialize_omits_removed_keys() {
        let mut doc = parse("[Service]\nUser=nobody\nGroup=nogroup").unwrap();
        doc.section_mut("Service").unwrap().remove("User");
        assert_eq!(serialize(&doc), "[Service]\nGroup=nogroup");
    }

    #[test]
    fn test_round_trip() {
        let text = "# leading comment
[Unit]
Description=round trip
Documentation=man:a(1)
Documentation=man:b(5)

[Service]
Type=oneshot
RemainAfterExit=true
PrivateTmp=on
Nice=0
TimeoutSec=1.0
Environment=A=1 \\
  B=2
ExecStart=/bin/true

[Unit]
After=network.target

[Install]
";
        let doc = parse(text).unwrap();
        let out = serialize(&doc);
        assert_eq!(parse(&out).unwrap(), doc);
        assert_eq!(serialize(&parse(&out).unwrap()), out);
        assert!(out.contains("RemainAfterExit=yes"));
        assert!(out.contains("Nice=no"));
        assert!(out.contains("TimeoutSec=1.0"));
        assert!(out.ends_with("[Install]"));
    }

    #[test]
    fn test_text_round_trip() {
        let text = "[Unit]
Description=stable
After=a.target
After=b.target

[Service]
PrivateTmp=yes
RestartSec=5";
        assert_eq!(serialize(&parse(text).unwrap()), text);
    }

    #[test]
    fn test_display() {
        let doc: Document = "[S]\nK=v".parse().unwrap();
        assert_eq!(doc.to_string(), "[S]\nK=v");
    }
}
