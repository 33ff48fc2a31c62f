//! XML root-element sniffing.
//!
//! Metadata definition files declare their type as the outermost element of
//! their XML body, so reading the first start tag is enough to tell which
//! metadata type a file (and therefore its folder) belongs to.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// Local name of the first start tag in `bytes`.
///
/// Returns `None` when the input holds no start tag; binary or malformed
/// files are an expected, silent no-match. Parsing stops as soon as the
/// first tag is seen.
pub fn root_element(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
        buf.clear();
    }
}

/// Sniff the root element of the file at `path`.
///
/// Unreadable files are treated as a silent no-match, the same as tag-less
/// content.
pub fn root_element_of_file(path: &Path) -> Option<String> {
    std::fs::read(path).ok().and_then(|bytes| root_element(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_element_of_definition() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<ApexClass xmlns="http://soap.sforce.com/2006/04/metadata">
    <apiVersion>62.0</apiVersion>
</ApexClass>"#;
        assert_eq!(root_element(xml), Some("ApexClass".to_string()));
    }

    #[test]
    fn test_root_element_skips_declaration_and_comments() {
        let xml = b"<?xml version=\"1.0\"?>\n<!-- generated -->\n<StaticResource/>";
        assert_eq!(root_element(xml), Some("StaticResource".to_string()));
    }

    #[test]
    fn test_root_element_strips_namespace_prefix() {
        let xml = b"<md:ApexPage xmlns:md=\"urn:metadata\"></md:ApexPage>";
        assert_eq!(root_element(xml), Some("ApexPage".to_string()));
    }

    #[test]
    fn test_root_element_of_binary_is_none() {
        assert_eq!(root_element(&[0x50, 0x4b, 0x03, 0x04, 0xff, 0xfe]), None);
    }

    #[test]
    fn test_root_element_of_empty_is_none() {
        assert_eq!(root_element(b""), None);
        assert_eq!(root_element(b"just some text"), None);
    }

    #[test]
    fn test_root_element_of_missing_file_is_none() {
        assert_eq!(root_element_of_file(Path::new("/no/such/file.xml")), None);
    }
}
