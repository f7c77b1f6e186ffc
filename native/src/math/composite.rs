use super::color_parse::Paint;
use super::hex::Color;

/// Alpha-composite a paint over an opaque backdrop.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
pub fn composite_over(paint: Paint, backdrop: Color) -> Color {
    if paint.is_opaque() {
        return paint.color;
    }
    let alpha = paint.alpha.clamp(0.0, 1.0);

    let blend = |f: u8, b: u8| -> u8 {
        let result = f as f64 * alpha + b as f64 * (1.0 - alpha);
        result.round() as u8
    };

    Color::new(
        blend(paint.color.r, backdrop.r),
        blend(paint.color.g, backdrop.g),
        blend(paint.color.b, backdrop.b),
    )
}
