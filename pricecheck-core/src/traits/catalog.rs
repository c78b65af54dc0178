//! Product catalog trait

/// Display-ready product details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Product<'a> {
    /// Product name
    pub title: &'a str,
    /// Price, already formatted for display (e.g. "12,50")
    pub price: &'a str,
}

/// Maps a decoded barcode to a product
///
/// Where the catalog comes from (downloaded price list, local file, ...) is
/// up to the implementation.
pub trait ProductLookup {
    /// Find the product for a barcode
    fn lookup(&self, code: &str) -> Option<Product<'_>>;
}

impl<T: ProductLookup + ?Sized> ProductLookup for &T {
    fn lookup(&self, code: &str) -> Option<Product<'_>> {
        (**self).lookup(code)
    }
}
