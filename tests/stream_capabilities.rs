#![cfg(feature = "streams")]

use std::io::{BufReader, Cursor, ErrorKind};

use strong_caps::prelude::*;
use strong_caps::stream;

strong! {
    CycleCount(i32): Equals, Adds, Outputs, Inputs;
    Frequency(f64): Outputs;
    Label(String): Equals, Inputs;
}

#[test]
fn test_display_matches_underlying() {
    assert_eq!(CycleCount::new(-12).to_string(), (-12).to_string());
    assert_eq!(format!("{:06.2}", Frequency::new(2.6)), format!("{:06.2}", 2.6));
}

#[test]
fn test_write_then_read_back() {
    let mut out = Vec::new();
    for c in [CycleCount::new(50), CycleCount::new(60) + CycleCount::new(4)] {
        stream::write(&mut out, &c).unwrap().push(b'\n');
    }
    assert_eq!(out, b"50\n64\n");

    let mut input = BufReader::new(Cursor::new(out));
    let mut a = CycleCount::default();
    let mut b = CycleCount::default();
    stream::read(stream::read(&mut input, &mut a).unwrap(), &mut b).unwrap();
    assert_eq!((a, b), (CycleCount::new(50), CycleCount::new(64)));
}

#[test]
fn test_read_failures_follow_stream_convention() {
    let mut input: &[u8] = b"forty-two";
    let mut c = CycleCount::new(1);
    let err = stream::read(&mut input, &mut c).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(c, CycleCount::new(1));

    let mut empty: &[u8] = b"   \n\t ";
    let err = stream::read(&mut empty, &mut c).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

    let mut invalid: &[u8] = &[0xff, 0xfe];
    let err = stream::read(&mut invalid, &mut c).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn test_read_string_tokens() {
    let mut input: &[u8] = b"main-street  elm";
    let mut first = Label::default();
    let mut second = Label::default();
    stream::read(&mut input, &mut first).unwrap();
    stream::read(&mut input, &mut second).unwrap();
    assert_eq!(first, Label::new("main-street".to_owned()));
    assert_eq!(second, Label::new("elm".to_owned()));
}

#[test]
fn test_from_str() {
    assert_eq!("17".parse::<CycleCount>().unwrap(), CycleCount::new(17));
    assert_eq!("x".parse::<CycleCount>().unwrap_err(), "x".parse::<i32>().unwrap_err());
}
