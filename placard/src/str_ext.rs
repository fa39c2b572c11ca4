use bstr::ByteSlice as _;

use crate::render::Decoding;

pub(crate) trait BStrExt {
    fn char_codes(&self, decoding: Decoding) -> Vec<u32>;
}

impl BStrExt for [u8] {
    fn char_codes(&self, decoding: Decoding) -> Vec<u32> {
        match decoding {
            Decoding::Utf8 => self.chars().map(u32::from).collect(),
            Decoding::Bytes => self.iter().copied().map(u32::from).collect(),
        }
    }
}
