#![cfg(feature = "prelude")]

use pdf_date::prelude::*;

#[test]
fn test_prelude_imports() {
    let timestamp: PdfTimestamp = "D:20240229120000+01'".parse().unwrap();
    let offset: PdfOffset = timestamp.offset().unwrap();
    let datetime: PdfDateTime = timestamp.to_datetime().unwrap();

    assert_eq!(Sign::Plus, offset.sign());
    assert_eq!("D: 20240229120000+01'00'", format(&datetime.fixed().unwrap()));

    let error: PdfDateResult<PdfDateTime> = parse("D:20241301");
    assert_eq!(
        Err(PdfDateError::InvalidFormat {
            field: DateField::Month,
            value: 13,
        }),
        error,
    );
}
