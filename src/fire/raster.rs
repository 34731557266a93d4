use super::field::FireField;
use super::palette::Palette;
use crate::display::PixelBuffer;

/// Flatten the heat grid into RGBA pixels, one pixel per cell
///
/// The buffer is resized to the field when the two disagree. Cold cells
/// come out as all-zero bytes (transparent black), everything else as the
/// palette color for its heat. The field is only read.
pub fn rasterize(field: &FireField, palette: &Palette, out: &mut PixelBuffer) {
    out.resize(field.width(), field.height());

    for (px, &heat) in out.as_bytes_mut().chunks_exact_mut(4).zip(field.cells()) {
        let rgba = if heat == 0 {
            [0; 4]
        } else {
            palette.get(heat).to_bytes()
        };
        px.copy_from_slice(&rgba);
    }
}
