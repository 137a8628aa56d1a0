//! Tests for frame encoding and payload framing

use futures::StreamExt;
use interrogate::Question;
use interrogate::protocol::{ClientFrame, ErrorCode, Notice, OutboundFrame, decode_payload, encode_frame};
use interrogate::transport::socket::PayloadCodec;
use serde_json::{Value, json};
use tokio_util::codec::FramedRead;

fn encoded(frame: impl Into<OutboundFrame>) -> Value {
    let line = encode_frame(&frame.into()).unwrap();
    assert!(!line.contains('\n'));
    serde_json::from_str(&line).unwrap()
}

#[test]
fn test_single_question_frame() {
    let question = Question::list("platform")
        .message("Which platform?")
        .choices(["ios", "android"])
        .default_value("ios")
        .extra("pageSize", 5);

    assert_eq!(
        encoded(ClientFrame::question(&question)),
        json!({
            "type": "question",
            "question": {
                "name": "platform",
                "type": "list",
                "message": "Which platform?",
                "default": "ios",
                "choices": ["ios", "android"],
                "pageSize": 5
            }
        })
    );
}

#[test]
fn test_callbacks_are_not_serialized() {
    let question = Question::input("a")
        .when(|_| true)
        .validate(|_: &Value| true)
        .filter(|v| v);
    let frame = encoded(ClientFrame::question(&question));
    assert_eq!(frame["question"], json!({"name": "a", "type": "input"}));
}

#[test]
fn test_bundle_frame_is_an_array() {
    let questions = [Question::input("a"), Question::confirm("b")];
    assert_eq!(
        encoded(ClientFrame::bundle(&questions)),
        json!({
            "type": "question",
            "question": [
                {"name": "a", "type": "input"},
                {"name": "b", "type": "confirm"}
            ]
        })
    );
}

#[test]
fn test_error_frames() {
    assert_eq!(ErrorCode::Parse.as_str(), "ERROR_PARSE");
    assert_eq!(ErrorCode::Validate.as_str(), "ERROR_VALIDATE");

    let validate = encoded(ClientFrame::validate_error("too short"));
    assert_eq!(
        validate,
        json!({"type": "error", "code": "ERROR_VALIDATE", "message": "validate error: too short"})
    );

    let parse = encoded(ClientFrame::parse_error("expected value"));
    assert_eq!(parse["code"], "ERROR_PARSE");
    assert_eq!(parse["message"], "parse error: expected value");
}

#[test]
fn test_notice_frame() {
    let notice = Notice {
        kind: "message".to_string(),
        code: "DONE".to_string(),
        message: "Build finished".to_string(),
    };
    assert_eq!(
        encoded(notice),
        json!({"type": "message", "code": "DONE", "message": "Build finished"})
    );
}

#[test]
fn test_decode_payload() {
    assert_eq!(decode_payload(br#"{"a":1}"#).unwrap(), json!({"a": 1}));
    assert_eq!(decode_payload(b"true").unwrap(), json!(true));
    assert!(decode_payload(b"{oops").is_err());
}

#[tokio::test]
async fn test_codec_splits_newline_delimited_payloads() {
    let stream = tokio_test::io::Builder::new()
        .read(b"1\n\"two\"\n")
        .read(b"{\"three\":3}\r\n")
        .build();
    let payloads: Vec<_> = FramedRead::new(stream, PayloadCodec::default())
        .map(|p| String::from_utf8(p.unwrap().to_vec()).unwrap())
        .collect()
        .await;
    assert_eq!(payloads, vec!["1", "\"two\"", "{\"three\":3}"]);
}

#[tokio::test]
async fn test_codec_waits_for_complete_document_without_newline() {
    let stream = tokio_test::io::Builder::new()
        .read(b"{\"name\":")
        .read(b"\"ada\"}")
        .build();
    let payloads: Vec<_> = FramedRead::new(stream, PayloadCodec::default())
        .map(|p| p.unwrap())
        .collect()
        .await;
    assert_eq!(payloads.len(), 1);
    assert_eq!(decode_payload(&payloads[0]).unwrap(), json!({"name": "ada"}));
}

#[tokio::test]
async fn test_codec_emits_malformed_payload_for_error_reporting() {
    let stream = tokio_test::io::Builder::new().read(b"}not json").build();
    let mut frames = FramedRead::new(stream, PayloadCodec::default());
    let payload = frames.next().await.unwrap().unwrap();
    assert!(decode_payload(&payload).is_err());
}

#[tokio::test]
async fn test_codec_emits_oversized_payload() {
    let stream = tokio_test::io::Builder::new().read(b"[1,2,3,4,5,6").build();
    let mut frames = FramedRead::new(stream, PayloadCodec::new(4));
    let payload = frames.next().await.unwrap().unwrap();
    assert_eq!(&payload[..], b"[1,2,3,4,5,6");
}

#[tokio::test]
async fn test_codec_keeps_pretty_printed_document_whole() {
    let pretty = serde_json::to_string_pretty(&json!({"a": 1, "b": [true, false]})).unwrap();
    assert!(pretty.contains('\n'));

    let stream = tokio_test::io::Builder::new()
        .read(pretty.as_bytes())
        .read(b"\n\"next\"\n")
        .build();
    let payloads: Vec<_> = FramedRead::new(stream, PayloadCodec::default())
        .map(|p| decode_payload(&p.unwrap()).unwrap())
        .collect()
        .await;
    assert_eq!(payloads, vec![json!({"a": 1, "b": [true, false]}), json!("next")]);
}

#[tokio::test]
async fn test_codec_waits_for_rest_of_multi_line_document() {
    let stream = tokio_test::io::Builder::new()
        .read(b"{\n  \"name\": ")
        .read(b"\"ada\"\n}")
        .build();
    let payloads: Vec<_> = FramedRead::new(stream, PayloadCodec::default())
        .map(|p| decode_payload(&p.unwrap()).unwrap())
        .collect()
        .await;
    assert_eq!(payloads, vec![json!({"name": "ada"})]);
}
