#![cfg_attr(not(feature = "log"), allow(unused_variables))]
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
#[cfg(feature = "log")]
use log::debug;
#[cfg(not(feature = "log"))]
use crate::debug;

fn is_return(e: &BytesStart) -> bool {
    e.local_name().as_ref() == b"return"
}

/// Text content of the first `return` element in `xml`, matched on local name.
///
/// Text of nested elements and CDATA sections is concatenated in document
/// order, entity references are decoded and whitespace is kept. Returns `None`
/// when no such element closes before the end of input or a syntax error.
pub fn return_text(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    // nesting depth below the matched <return>, None until it is found
    let mut depth: Option<usize> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match depth {
                Some(d) => depth = Some(d + 1),
                None => {
                    if is_return(&e) {
                        depth = Some(0)
                    }
                }
            },
            Ok(Event::Empty(e)) => {
                if depth.is_none() && is_return(&e) {
                    return Some(String::new())
                }
            }
            Ok(Event::Text(e)) => {
                if depth.is_some() {
                    match e.unescape() {
                        Ok(t) => text.push_str(&t),
                        Err(err) => {
                            debug!("cannot decode text inside <return>: {:?}", err);
                            return None
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if depth.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => match depth {
                Some(0) => return Some(text),
                Some(d) => depth = Some(d - 1),
                None => {}
            },
            Ok(Event::Eof) => {
                debug!("reached end of document without a complete <return> element");
                return None
            }
            Ok(_) => {}
            Err(e) => {
                debug!("xml error at position {}: {:?}", reader.buffer_position(), e);
                return None
            }
        }
    }
}
