use std::fmt;

/// Product barcode in one of two formats, each carrying its own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Barcode {
    /// Number system, manufacturer, product and check digit.
    Upc(u8, u32, u32, u8),
    QrCode(String),
}

impl Barcode {
    pub fn is_upc(&self) -> bool {
        matches!(self, Barcode::Upc(..))
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Barcode::Upc(number_system, manufacturer, product, check) => write!(
                f,
                "UPC: {}, {}, {}, {}.",
                number_system, manufacturer, product, check
            ),
            Barcode::QrCode(code) => write!(f, "QR code: {}.", code),
        }
    }
}
