//! Mobipocket index writer
//!
//! Emits the XHTML dictionary source consumed by kindlegen: one
//! `<idx:entry>` per entry with its senses and `<idx:orth>` lookup keys.
//!
//! References:
//! - http://www.mobipocket.com/dev/article.asp?basefolder=prcgen&file=indexing.htm
//! - http://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf

use std::io::{self, Write};

use quick_xml::escape::{escape, partial_escape};

use crate::config::WriterConfig;
use crate::entry::{Entry, Ortho};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const DOCTYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n";
const HTML_OPEN: &str = "<html xmlns:idx=\"www.mobipocket.com\" xmlns:mbp=\"www.mobipocket.com\" xmlns=\"http://www.w3.org/1999/xhtml\">\n";
const BODY_OPEN: &str = "<body topmargin=\"0\" bottommargin=\"0\" leftmargin=\"0\" rightmargin=\"0\">\n";

/// Write the index document with the default [`WriterConfig`].
///
/// # Panics
///
/// Panics if an entry has no senses.
pub fn write_index<W: Write>(entries: &[Entry], stream: &mut W) -> io::Result<()> {
    write_index_with_config(entries, &WriterConfig::default(), stream)
}

/// Write the index document for `entries` to `stream`.
///
/// # Panics
///
/// Panics if an entry has no senses.
pub fn write_index_with_config<W: Write>(
    entries: &[Entry],
    config: &WriterConfig,
    stream: &mut W,
) -> io::Result<()> {
    stream.write_all(XML_DECLARATION.as_bytes())?;
    stream.write_all(DOCTYPE.as_bytes())?;
    stream.write_all(HTML_OPEN.as_bytes())?;
    stream.write_all(b"<head>\n")?;
    stream.write_all(
        b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>\n",
    )?;
    writeln!(
        stream,
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\"/>",
        escape(config.stylesheet.as_str())
    )?;
    stream.write_all(b"</head>\n")?;
    stream.write_all(BODY_OPEN.as_bytes())?;
    stream.write_all(b"<mbp:pagebreak/>\n")?;

    for entry in entries {
        write_entry(entry, stream)?;
    }

    stream.write_all(b"</body>\n")?;
    stream.write_all(b"</html>\n")?;
    Ok(())
}

/// Render the whole index document to a string
pub fn format_index(entries: &[Entry], config: &WriterConfig) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_index_with_config(entries, config, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_entry<W: Write>(entry: &Entry, stream: &mut W) -> io::Result<()> {
    assert!(
        !entry.senses.is_empty(),
        "entry `{}` has no senses",
        entry.label
    );

    stream.write_all(b"<idx:entry>\n")?;
    writeln!(
        stream,
        " <p class=label>{}</p>",
        partial_escape(entry.label.as_str())
    )?;

    stream.write_all(b" <ul>\n")?;
    for sense in &entry.senses {
        stream.write_all(b" <li>")?;
        if !sense.pos.is_empty() {
            write!(
                stream,
                "<span class=pos>{}</span> ",
                partial_escape(sense.pos.join(",").as_str())
            )?;
        }
        write!(stream, "{}", partial_escape(sense.gloss.join("; ").as_str()))?;
        stream.write_all(b"</li>\n")?;
    }
    stream.write_all(b" </ul>\n")?;

    for ortho in &entry.orthos {
        write_ortho(ortho, stream)?;
    }

    stream.write_all(b"</idx:entry>\n")?;
    stream.write_all(b"<hr/>\n")?;
    Ok(())
}

fn write_ortho<W: Write>(ortho: &Ortho, stream: &mut W) -> io::Result<()> {
    write!(stream, " <idx:orth value=\"{}\"", escape(ortho.value.as_str()))?;
    if ortho.inflgrps.is_empty() {
        return stream.write_all(b"/>\n");
    }

    stream.write_all(b">\n")?;
    for forms in ortho.inflgrps.values() {
        debug_assert!(!forms.is_empty(), "empty inflection group");
        stream.write_all(b"  <idx:infl>\n")?;
        // BTreeSet iterates in sorted order
        for form in forms {
            writeln!(stream, "   <idx:iform value=\"{}\"/>", escape(form.as_str()))?;
        }
        stream.write_all(b"  </idx:infl>\n")?;
    }
    stream.write_all(b" </idx:orth>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Sense;

    #[test]
    fn test_write_simple_entry() {
        let entry = Entry::new(
            "cat",
            vec![Sense::new(["n"], ["feline", "small carnivore"])],
            vec![Ortho::new("cat", 0)],
        );
        let out = format_index(&[entry], &WriterConfig::default());

        assert!(out.contains("<p class=label>cat</p>"));
        assert!(out.contains(" <li><span class=pos>n</span> feline; small carnivore</li>\n"));
        assert!(out.contains(" <idx:orth value=\"cat\"/>\n"));
        assert!(out.contains("</idx:entry>\n<hr/>\n"));
    }

    #[test]
    fn test_sense_without_pos() {
        let entry = Entry::new(
            "ok",
            vec![Sense::new(Vec::<String>::new(), ["all right"])],
            vec![Ortho::new("ok", 0)],
        );
        let out = format_index(&[entry], &WriterConfig::default());
        assert!(out.contains(" <li>all right</li>\n"));
        assert!(!out.contains("class=pos"));
    }

    #[test]
    fn test_escaping() {
        let entry = Entry::new(
            "R&D <lab>",
            vec![Sense::new(["n&v"], ["a \"quoted\" <b>gloss</b>"])],
            vec![Ortho::new("say \"hi\"", 0).with_inflections("x", ["a<b"])],
        );
        let out = format_index(&[entry], &WriterConfig::default());

        assert!(out.contains("<p class=label>R&amp;D &lt;lab&gt;</p>"));
        assert!(out.contains("<span class=pos>n&amp;v</span>"));
        assert!(out.contains("a \"quoted\" &lt;b&gt;gloss&lt;/b&gt;"));
        assert!(out.contains("<idx:orth value=\"say &quot;hi&quot;\">"));
        assert!(out.contains("<idx:iform value=\"a&lt;b\"/>"));
    }

    #[test]
    fn test_custom_stylesheet() {
        let config = WriterConfig {
            stylesheet: "kindle.css".to_string(),
        };
        let out = format_index(&[], &config);
        assert!(out.contains("href=\"kindle.css\""));
        assert!(out.ends_with("<mbp:pagebreak/>\n</body>\n</html>\n"));
    }

    #[test]
    #[should_panic(expected = "has no senses")]
    fn test_entry_without_senses_panics() {
        let entry = Entry::new("empty", Vec::new(), vec![Ortho::new("empty", 0)]);
        let mut buf = Vec::new();
        let _ = write_index(&[entry], &mut buf);
    }
}
