//! Framing for the socket transport
//!
//! Outbound frames are one JSON document per line. Inbound payloads end where
//! the first complete JSON document in the buffer ends, so a peer may send
//! pretty-printed documents spanning several lines. Bytes that can never
//! become a document are handed over up to the next newline (or whole) so
//! the caller can report them. Only a valid-but-incomplete prefix is held
//! back.

use bytes::{Buf, BufMut, BytesMut};
use serde::de::IgnoredAny;
use tokio_util::codec::{Decoder, Encoder};

use super::config::DEFAULT_MAX_BUFFER_SIZE;

/// Codec splitting the peer byte stream into payloads
#[derive(Debug, Clone, Copy)]
pub struct PayloadCodec {
    max_buffer_size: usize,
}

impl PayloadCodec {
    /// Create a codec with a custom inbound size limit
    #[must_use]
    pub const fn new(max_buffer_size: usize) -> Self {
        Self { max_buffer_size }
    }
}

impl Default for PayloadCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BUFFER_SIZE)
    }
}

impl Decoder for PayloadCodec {
    type Item = BytesMut;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<BytesMut>, Self::Error> {
        // Separators between payloads
        match src.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(start) => src.advance(start),
            None => {
                src.clear();
                return Ok(None);
            }
        }

        let mut documents =
            serde_json::Deserializer::from_slice(&src[..]).into_iter::<IgnoredAny>();
        match documents.next() {
            Some(Ok(_)) => {
                let end = documents.byte_offset();
                Ok(Some(src.split_to(end)))
            }
            Some(Err(e)) if e.is_eof() => {
                if src.len() > self.max_buffer_size {
                    log::warn!(
                        "Inbound payload exceeded {} bytes without completing",
                        self.max_buffer_size
                    );
                    return Ok(Some(src.split()));
                }
                Ok(None)
            }
            // Malformed: hand over up to the end of the line so the caller
            // can report it
            _ => match src.iter().position(|b| *b == b'\n') {
                Some(newline) => {
                    let mut line = src.split_to(newline + 1);
                    line.truncate(newline);
                    if line.last() == Some(&b'\r') {
                        line.truncate(newline - 1);
                    }
                    Ok(Some(line))
                }
                None => Ok(Some(src.split())),
            },
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<BytesMut>, Self::Error> {
        match self.decode(src)? {
            Some(payload) => Ok(Some(payload)),
            None if src.is_empty() => Ok(None),
            None => Ok(Some(src.split())),
        }
    }
}

impl Encoder<String> for PayloadCodec {
    type Error = std::io::Error;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(line.len() + 1);
        dst.put_slice(line.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(codec: &mut PayloadCodec, input: &str) -> Vec<String> {
        let mut buf = BytesMut::from(input);
        let mut out = Vec::new();
        while let Some(payload) = codec.decode(&mut buf).unwrap() {
            out.push(String::from_utf8(payload.to_vec()).unwrap());
        }
        out
    }

    #[test]
    fn splits_newline_delimited_payloads() {
        let mut codec = PayloadCodec::default();
        assert_eq!(decode_all(&mut codec, "1\r\n{\"a\":2}\n"), vec!["1", "{\"a\":2}"]);
    }

    #[test]
    fn complete_document_without_newline_is_a_payload() {
        let mut codec = PayloadCodec::default();
        assert_eq!(decode_all(&mut codec, "{\"a\":1,\"b\":2}"), vec!["{\"a\":1,\"b\":2}"]);
    }

    #[test]
    fn holds_back_incomplete_prefix() {
        let mut codec = PayloadCodec::default();
        let mut buf = BytesMut::from("{\"a\":");
        assert!(codec.decode(&mut buf).unwrap().is_none());
        buf.extend_from_slice(b"1}");
        let payload = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&payload[..], b"{\"a\":1}");
    }

    #[test]
    fn multi_line_document_is_one_payload() {
        let mut codec = PayloadCodec::default();
        let pretty = "{\n  \"a\": 1,\n  \"b\": 2\n}";
        assert_eq!(decode_all(&mut codec, pretty), vec![pretty]);
    }

    #[test]
    fn malformed_line_is_cut_at_newline() {
        let mut codec = PayloadCodec::default();
        assert_eq!(decode_all(&mut codec, "oops\n7\n"), vec!["oops", "7"]);
    }

    #[test]
    fn malformed_bytes_are_handed_over() {
        let mut codec = PayloadCodec::default();
        assert_eq!(decode_all(&mut codec, "not json"), vec!["not json"]);
    }

    #[test]
    fn oversized_payload_is_handed_over() {
        let mut codec = PayloadCodec::new(4);
        assert_eq!(decode_all(&mut codec, "[1, 2, 3"), vec!["[1, 2, 3"]);
    }

    #[test]
    fn eof_flushes_partial_payload() {
        let mut codec = PayloadCodec::default();
        let mut buf = BytesMut::from("[1,");
        let payload = codec.decode_eof(&mut buf).unwrap().unwrap();
        assert_eq!(&payload[..], b"[1,");
    }

    #[test]
    fn encoder_appends_newline() {
        let mut codec = PayloadCodec::default();
        let mut dst = BytesMut::new();
        codec.encode("{}".to_string(), &mut dst).unwrap();
        assert_eq!(&dst[..], b"{}\n");
    }
}
