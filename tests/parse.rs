use chrono::{Datelike, NaiveDate, Timelike};
use pdf_date::datetime::PdfTimestamp;
use pdf_date::datetime::offset::Sign;
use pdf_date::errors::{DateField, PdfDateError};
use pdf_date::{PdfDateTime, parse};
use wasm_bindgen_test::wasm_bindgen_test;

#[test]
#[wasm_bindgen_test]
fn test_parse_full_date() {
    let datetime = parse("D:19981223195208").unwrap();
    let expected = NaiveDate::from_ymd_opt(1998, 12, 23)
        .unwrap()
        .and_hms_opt(19, 52, 8)
        .unwrap();

    assert_eq!(PdfDateTime::Local(expected), datetime);
    assert!(datetime.is_local());
    assert!(datetime.fixed().is_none());
}

#[test]
#[wasm_bindgen_test]
fn test_parse_negative_offset() {
    let datetime = parse("D:199812231952-08'00'").unwrap();
    let fixed = datetime.fixed().unwrap();

    assert_eq!((1998, 12, 23), (fixed.year(), fixed.month(), fixed.day()));
    assert_eq!((19, 52, 0), (fixed.hour(), fixed.minute(), fixed.second()));
    assert_eq!(-8 * 3600, fixed.offset().local_minus_utc());
    assert_eq!("1998-12-24T03:52:00+00:00", fixed.to_utc().to_rfc3339());
}

#[test]
#[wasm_bindgen_test]
fn test_parse_year_only() {
    let datetime = parse("D:1998").unwrap();

    assert!(datetime.is_local());
    assert_eq!("1998-01-01T00:00:00", datetime.naive_local().format("%FT%T").to_string());
}

#[test]
#[wasm_bindgen_test]
fn test_parse_defaults_per_length() {
    #[rustfmt::skip]
    let expected = [
        ("1998-01-01 00:00:00", "D:1998"),
        ("1998-01-01 00:00:00", "D:19981"),
        ("1998-12-01 00:00:00", "D:199812"),
        ("1998-12-01 00:00:00", "D:1998122"),
        ("1998-12-23 00:00:00", "D:19981223"),
        ("1998-12-23 19:00:00", "D:1998122319"),
        ("1998-12-23 19:52:00", "D:199812231952"),
        ("1998-12-23 19:52:08", "D:19981223195208"),
        ("1998-12-23 19:52:08", "19981223195208"),
    ];

    for (local, raw) in expected {
        let datetime = parse(raw).unwrap();

        assert_eq!(local, datetime.naive_local().to_string(), "{raw}");
        assert!(datetime.is_local(), "{raw}");
    }
}

#[test]
#[wasm_bindgen_test]
fn test_parse_invalid_month() {
    assert_eq!(
        Err(PdfDateError::InvalidFormat {
            field: DateField::Month,
            value: 13,
        }),
        parse("D:19981323"),
    );
}

#[test]
#[wasm_bindgen_test]
fn test_parse_not_pdf_format() {
    for raw in ["abc", "", "D:", "D:98", "Friday, 1 January 1999"] {
        assert!(
            matches!(parse(raw), Err(PdfDateError::NotPdfFormat(input)) if input == raw),
            "{raw}",
        );
    }
}

#[test]
#[wasm_bindgen_test]
fn test_parse_invalid_datetime() {
    assert!(matches!(
        parse("D:19990230"),
        Err(PdfDateError::InvalidDateTime(_)),
    ));
}

#[test]
#[wasm_bindgen_test]
fn test_z_is_always_utc() {
    for raw in [
        "D:19981223195208Z",
        "D:1998Z",
        "D:19981223195208Z05'00'",
        "D:19981223195208Z99'99'",
    ] {
        let datetime = parse(raw).unwrap();

        assert!(datetime.is_utc(), "{raw}");
        assert_eq!(Some(0), datetime.offset().map(|o| o.local_minus_utc()), "{raw}");
    }
}

#[test]
#[wasm_bindgen_test]
fn test_bare_sign_is_zero_offset() {
    for (sign, raw) in [(Sign::Plus, "D:19981223195208+"), (Sign::Minus, "D:19981223195208-")] {
        let timestamp = PdfTimestamp::parse(raw).unwrap();
        let offset = timestamp.offset().unwrap();

        assert_eq!(sign, offset.sign());
        assert!(offset.is_utc());

        let datetime = timestamp.to_datetime().unwrap();
        assert!(datetime.is_offset());
        assert!(!datetime.is_local());
    }

    // No designator at all
    assert!(parse("D:19981223195208").unwrap().is_local());
}

#[test]
#[wasm_bindgen_test]
fn test_offset_after_truncated_fields() {
    let datetime = parse("D:1998-08'00'").unwrap();

    assert_eq!("1998-01-01 00:00:00", datetime.naive_local().to_string());
    assert_eq!(Some(-8 * 3600), datetime.offset().map(|o| o.local_minus_utc()));
}

#[test]
#[wasm_bindgen_test]
fn test_offset_hours_only() {
    let timestamp = PdfTimestamp::parse("D:20010607080910+11'").unwrap();
    let offset = timestamp.offset().unwrap();

    assert_eq!((11, 0), (offset.hours(), offset.minutes()));
    assert_eq!(660, offset.offset());
}

#[test]
#[wasm_bindgen_test]
fn test_offset_out_of_range() {
    #[rustfmt::skip]
    let expected = [
        (DateField::OffsetHour, 24, "D:19981223195208+24'00'"),
        (DateField::OffsetMinute, 75, "D:19981223195208-01'75'"),
    ];

    for (field, value, raw) in expected {
        assert_eq!(Err(PdfDateError::InvalidFormat { field, value }), parse(raw), "{raw}");
    }
}

#[test]
#[wasm_bindgen_test]
fn test_unterminated_offset_is_unknown() {
    // Offset groups must end with an apostrophe
    let datetime = parse("D:19981223195208+08'00").unwrap();

    assert!(datetime.is_local());
}

#[test]
#[wasm_bindgen_test]
fn test_from_str() {
    let datetime: PdfDateTime = "D:20230125101135Z".parse().unwrap();
    let timestamp: PdfTimestamp = "D:20230125101135Z".parse().unwrap();

    assert_eq!(datetime, timestamp.to_datetime().unwrap());
    assert!("n/a".parse::<PdfDateTime>().is_err());
}
