use tracing::trace;

use super::Display;
use super::geometry::{CirclePoint, circle_points, filled_circle_points};
use crate::transport::Transport;
use crate::types::opcodes::{BACKLIGHT_FLOOR, MAX_TEXT_CHARS, cmd};
use crate::types::{
    Color, Direction, FontSize, MoveMode, NumberMode, RectangleMode, Rotation, TextMode,
};
use crate::{DisplayError, FieldWidth, Frame, Result};

/// Horizontal offset of the sign glyph drawn by `draw_signed_float`
const SIGN_OFFSET_X: i32 = 6;
/// Vertical offset of the sign glyph drawn by `draw_signed_float`
const SIGN_OFFSET_Y: i32 = 3;

impl<T: Transport> Display<T> {
    /// Set the palette used by primitives that carry no color of their own.
    pub fn set_palette(&mut self, background: Color, foreground: Color) -> Result<()> {
        trace!("set_palette fg={:#06x} bg={:#06x}", foreground.value(), background.value());
        let mut frame = Frame::new();
        frame.byte(cmd::SET_PALETTE)?.word(foreground)?.word(background)?;
        self.link.send(&mut frame)
    }

    /// Fill the whole screen with one color.
    pub fn clear_screen(&mut self, color: Color) -> Result<()> {
        trace!("clear_screen color={:#06x}", color.value());
        let mut frame = Frame::new();
        frame.byte(cmd::CLEAR_SCREEN)?.word(color)?;
        self.link.send(&mut frame)
    }

    /// Draw a `width` x `height` pixel block with its corner at `(x, y)`.
    pub fn draw_point(&mut self, color: Color, width: u8, height: u8, x: i32, y: i32) -> Result<()> {
        trace!("draw_point {}x{} at ({}, {})", width, height, x, y);
        let mut frame = point_frame(color, width, height, x, y)?;
        self.link.send(&mut frame)
    }

    pub fn draw_line(&mut self, color: Color, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        trace!("draw_line ({}, {}) -> ({}, {})", x0, y0, x1, y1);
        let mut frame = Frame::new();
        frame
            .byte(cmd::DRAW_LINE)?
            .word(color)?
            .word(x0)?
            .word(y0)?
            .word(x1)?
            .word(y1)?;
        self.link.send(&mut frame)
    }

    /// Draw a rectangle between two corners.
    ///
    /// The rectangle command takes its color from the palette, so this first sends
    /// `set_palette(WHITE, color)`. The palette stays changed afterwards.
    pub fn draw_rectangle(
        &mut self,
        mode: RectangleMode,
        color: Color,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> Result<()> {
        let mut frame = Frame::new();
        frame
            .byte(cmd::DRAW_RECT)?
            .byte(mode.code())?
            .word(x0)?
            .word(y0)?
            .word(x1)?
            .word(y1)?;

        self.set_palette(Color::WHITE, color)?;
        trace!("draw_rectangle {:?} ({}, {}) -> ({}, {})", mode, x0, y0, x1, y1);
        self.link.send(&mut frame)
    }

    /// Outline a circle with 1x1 point draws, 8 per step.
    ///
    /// Every point is a separate command on the wire, so cost grows linearly with the
    /// radius. All points are encoded before the first one is sent: a circle that
    /// crosses the coordinate range fails without drawing anything.
    pub fn draw_circle(&mut self, color: Color, cx: i32, cy: i32, radius: u16) -> Result<()> {
        trace!("draw_circle r={} at ({}, {})", radius, cx, cy);
        let frames = point_frames(color, circle_points(cx, cy, radius))?;
        self.send_all(frames)
    }

    /// Fill a circle with concentric rings of 2x2 point draws.
    ///
    /// Sends roughly `r² / 2` commands, encoded up front like [`Display::draw_circle`].
    pub fn fill_circle(&mut self, color: Color, cx: i32, cy: i32, radius: u16) -> Result<()> {
        trace!("fill_circle r={} at ({}, {})", radius, cx, cy);
        let frames = point_frames(color, filled_circle_points(cx, cy, radius))?;
        self.send_all(frames)
    }

    /// Draw text. Only the first 40 characters are sent.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_string(
        &mut self,
        show_background: bool,
        font_size: FontSize,
        color: Color,
        background: Color,
        x: i32,
        y: i32,
        text: &str,
    ) -> Result<()> {
        let text = truncate_chars(text, MAX_TEXT_CHARS);
        trace!("draw_string {:?} at ({}, {})", text, x, y);
        let mode = TextMode::new(show_background, font_size);
        let mut frame = text_frame(mode, color, background, x, y, text)?;
        self.link.send(&mut frame)
    }

    /// Draw an integer with `digits` integer digits.
    ///
    /// The value travels in an 8-byte field: plain when `mode.signed` is clear (negative
    /// values are rejected), two's complement when it is set.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_int_value(
        &mut self,
        mode: NumberMode,
        color: Color,
        background: Color,
        digits: u8,
        x: i32,
        y: i32,
        value: i64,
    ) -> Result<()> {
        trace!("draw_int_value {} at ({}, {})", value, x, y);
        let mut frame = Frame::new();
        frame
            .byte(cmd::DRAW_VALUE)?
            .byte(mode.to_byte())?
            .word(color)?
            .word(background)?
            .byte(digits)?
            .byte(0u8)?
            .word(x)?
            .word(y)?
            .double64(value_field(mode, FieldWidth::Double, value)?)?;
        self.link.send(&mut frame)
    }

    /// Draw a fixed-point number: `value` is the real number scaled by
    /// `10^fractional_digits` (see [`fixed_point`](super::fixed_point)).
    ///
    /// The value travels in a 4-byte field, signed per `mode.signed` as in
    /// [`Display::draw_int_value`].
    #[allow(clippy::too_many_arguments)]
    pub fn draw_float_value(
        &mut self,
        mode: NumberMode,
        color: Color,
        background: Color,
        integer_digits: u8,
        fractional_digits: u8,
        x: i32,
        y: i32,
        value: i64,
    ) -> Result<()> {
        trace!(
            "draw_float_value {} ({}.{} digits) at ({}, {})",
            value, integer_digits, fractional_digits, x, y
        );
        let mut frame =
            float_value_frame(mode, color, background, (integer_digits, fractional_digits), x, y, value)?;
        self.link.send(&mut frame)
    }

    /// Draw a signed fixed-point number as a sign glyph plus its magnitude.
    ///
    /// Sends two commands: `"-"` (or `" "` for non-negative values) as text at
    /// `(x - 6, y - 3)`, then the absolute value through an unsigned
    /// [`Display::draw_float_value`] at `(x, y)`. Both are encoded before either is
    /// sent, so a magnitude that does not fit the 4-byte field draws no sign.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_signed_float(
        &mut self,
        show_background: bool,
        font_size: FontSize,
        color: Color,
        background: Color,
        integer_digits: u8,
        fractional_digits: u8,
        x: i32,
        y: i32,
        value: i64,
    ) -> Result<()> {
        trace!("draw_signed_float {} at ({}, {})", value, x, y);
        let sign = if value < 0 { "-" } else { " " };
        let sign_frame = text_frame(
            TextMode::new(show_background, font_size),
            color,
            background,
            x.saturating_sub(SIGN_OFFSET_X),
            y.saturating_sub(SIGN_OFFSET_Y),
            sign,
        )?;

        let magnitude = i64::try_from(value.unsigned_abs())
            .map_err(|_| DisplayError::field_overflow(FieldWidth::Long, value.unsigned_abs()))?;
        let value_frame = float_value_frame(
            NumberMode::new(show_background, false, false, font_size),
            color,
            background,
            (integer_digits, fractional_digits),
            x,
            y,
            magnitude,
        )?;

        self.send_all([sign_frame, value_frame])
    }

    /// Draw icon `picture` from icon library `library`.
    ///
    /// Positions past the screen edge are clamped to the last row/column. The
    /// controller's icon command has no background flag, so `show_background` is
    /// accepted for call-site symmetry only.
    pub fn draw_icon(
        &mut self,
        show_background: bool,
        library: u8,
        picture: u16,
        x: i32,
        y: i32,
    ) -> Result<()> {
        let x = x.min(i32::from(self.config.screen_width) - 1);
        let y = y.min(i32::from(self.config.screen_height) - 1);
        trace!(library, picture, x, y, show_background, "draw_icon");

        let mut frame = Frame::new();
        frame
            .byte(cmd::DRAW_ICON)?
            .word(x)?
            .word(y)?
            .byte(library)?
            .word(picture)?;
        self.link.send(&mut frame)
    }

    /// Show a stored JPEG and cache it in the virtual display area.
    pub fn jpeg_show_and_cache(&mut self, id: u8) -> Result<()> {
        trace!("jpeg_show_and_cache id={}", id);
        let mut frame = Frame::new();
        frame.word(cmd::JPEG_SHOW_AND_CACHE)?.byte(id)?;
        self.link.send(&mut frame)
    }

    /// Show a stored image. Same command as [`Display::jpeg_show_and_cache`].
    pub fn draw_image(&mut self, id: u8) -> Result<()> {
        self.jpeg_show_and_cache(id)
    }

    /// Shift a screen area by `offset` pixels, filling the vacated strip with `background`.
    #[allow(clippy::too_many_arguments)]
    pub fn move_screen_area(
        &mut self,
        direction: Direction,
        offset: u16,
        background: Color,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> Result<()> {
        trace!(?direction, offset, x0, y0, x1, y1, "move_screen_area");
        let mut frame = Frame::new();
        frame
            .byte(cmd::MOVE_SCREEN_AREA)?
            .byte(MoveMode::translate(direction).to_byte())?
            .word(offset)?
            .word(background)?
            .word(x0)?
            .word(y0)?
            .word(x1)?
            .word(y1)?;
        self.link.send(&mut frame)
    }

    /// Set the backlight level. Levels below 0x1F are raised to 0x1F.
    pub fn set_backlight_brightness(&mut self, level: u8) -> Result<()> {
        let level = level.max(BACKLIGHT_FLOOR);
        trace!("set_backlight_brightness {:#04x}", level);
        let mut frame = Frame::new();
        frame.byte(cmd::BACKLIGHT_BRIGHTNESS)?.byte(level)?;
        self.link.send(&mut frame)
    }

    /// Set the screen orientation.
    pub fn frame_set_dir(&mut self, rotation: Rotation) -> Result<()> {
        trace!("frame_set_dir {:?}", rotation);
        let [key_hi, key_lo] = cmd::FRAME_SET_DIR_KEY;
        let mut frame = Frame::new();
        frame
            .byte(cmd::FRAME_SET_DIR)?
            .byte(key_hi)?
            .byte(key_lo)?
            .byte(rotation.code())?;
        self.link.send(&mut frame)
    }

    /// Push the drawing buffer to the screen.
    pub fn update_lcd(&mut self) -> Result<()> {
        trace!("update_lcd");
        let mut frame = Frame::new();
        frame.byte(cmd::UPDATE_LCD)?;
        self.link.send(&mut frame)
    }

    fn send_all(&mut self, frames: impl IntoIterator<Item = Frame>) -> Result<()> {
        for mut frame in frames {
            self.link.send(&mut frame)?;
        }
        Ok(())
    }
}

fn point_frame(color: Color, width: u8, height: u8, x: i32, y: i32) -> Result<Frame> {
    let mut frame = Frame::new();
    frame
        .byte(cmd::DRAW_LINE)?
        .word(color)?
        .byte(width)?
        .byte(height)?
        .word(x)?
        .word(y)?;
    Ok(frame)
}

fn point_frames(color: Color, points: Vec<CirclePoint>) -> Result<Vec<Frame>> {
    points
        .into_iter()
        .map(|p| point_frame(color, p.size, p.size, p.x, p.y))
        .collect()
}

fn text_frame(
    mode: TextMode,
    color: Color,
    background: Color,
    x: i32,
    y: i32,
    text: &str,
) -> Result<Frame> {
    let mut frame = Frame::new();
    frame
        .byte(cmd::DRAW_TEXT)?
        .byte(mode.to_byte())?
        .word(color)?
        .word(background)?
        .word(x)?
        .word(y)?
        .string(text);
    Ok(frame)
}

fn float_value_frame(
    mode: NumberMode,
    color: Color,
    background: Color,
    (integer_digits, fractional_digits): (u8, u8),
    x: i32,
    y: i32,
    value: i64,
) -> Result<Frame> {
    let mut frame = Frame::new();
    frame
        .byte(cmd::DRAW_VALUE)?
        .byte(mode.to_byte())?
        .word(color)?
        .word(background)?
        .byte(integer_digits)?
        .byte(fractional_digits)?
        .word(x)?
        .word(y)?
        .long(value_field(mode, FieldWidth::Long, value)?)?;
    Ok(frame)
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

// Unsigned values pass through (the frame rejects negatives); signed ones become
// two's complement within the field width.
fn value_field(mode: NumberMode, width: FieldWidth, value: i64) -> Result<i128> {
    let value = i128::from(value);
    if !mode.signed {
        return Ok(value);
    }

    let half = 1i128 << (width.size() * 8 - 1);
    if value < -half || value >= half {
        return Err(DisplayError::field_overflow(width, value));
    }
    Ok(if value < 0 { value + 2 * half } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingTransport;
    use crate::{DisplayConfig, LinkConfig};
    use proptest::prelude::*;

    fn display() -> (Display<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::new();
        let config = DisplayConfig { link: LinkConfig::immediate(), ..DisplayConfig::default() };
        (Display::new(transport.clone(), config).unwrap(), transport)
    }

    #[test]
    fn palette_and_clear() {
        let (mut display, panel) = display();
        display.set_palette(Color::BLACK, Color::WHITE).unwrap();
        display.clear_screen(Color::BG_WINDOW).unwrap();

        assert_eq!(panel.frames(), vec![vec![0x40, 0xFF, 0xFF, 0x00, 0x00], vec![0x52, 0x31, 0xE8]]);
    }

    #[test]
    fn point_uses_line_opcode_with_extents() {
        let (mut display, panel) = display();
        display.draw_point(Color::YELLOW, 2, 3, 0x0102, 0x0304).unwrap();

        assert_eq!(panel.frames(), vec![vec![0x51, 0xFF, 0x0F, 2, 3, 0x01, 0x02, 0x03, 0x04]]);
    }

    #[test]
    fn line_frame() {
        let (mut display, panel) = display();
        display.draw_line(Color::LINE, 16, 100, 256, 100).unwrap();

        assert_eq!(
            panel.frames(),
            vec![vec![0x51, 0x3A, 0x6A, 0x00, 0x10, 0x00, 0x64, 0x01, 0x00, 0x00, 0x64]]
        );
    }

    #[test]
    fn rectangle_sets_palette_first() {
        let (mut display, panel) = display();
        display.draw_rectangle(RectangleMode::XorFill, Color::RECTANGLE, 1, 2, 3, 4).unwrap();

        assert_eq!(
            panel.frames(),
            vec![
                vec![0x40, 0xEE, 0x2F, 0xFF, 0xFF],
                vec![0x05, 0x02, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04],
            ]
        );
    }

    #[test]
    fn rectangle_off_screen_sends_nothing() {
        let (mut display, panel) = display();
        let err = display.draw_rectangle(RectangleMode::Filled, Color::RECTANGLE, -1, 0, 10, 10);

        assert!(matches!(err, Err(DisplayError::FieldOverflow { .. })));
        assert!(panel.writes().is_empty());
    }

    #[test]
    fn string_frame_and_mode_byte() {
        let (mut display, panel) = display();
        display
            .draw_string(true, FontSize::Font10x20, Color::WHITE, Color::BG_BLUE, 10, 20, "Hi")
            .unwrap();

        assert_eq!(
            panel.frames(),
            vec![vec![0x11, 0xC2, 0xFF, 0xFF, 0x11, 0x25, 0x00, 0x0A, 0x00, 0x14, b'H', b'i']]
        );
    }

    #[test]
    fn string_truncated_to_forty_chars() {
        let (mut display, panel) = display();
        let long = "é".repeat(45);
        display.draw_string(false, FontSize::MENU, Color::WHITE, Color::BLACK, 0, 0, &long).unwrap();

        let frame = &panel.frames()[0];
        let text = std::str::from_utf8(&frame[10..]).unwrap();
        assert_eq!(text.chars().count(), 40);
        assert_eq!(frame[1], 0x81);
    }

    #[test]
    fn int_value_frame() {
        let (mut display, panel) = display();
        let mode = NumberMode::new(true, true, true, FontSize::Font8x16);
        display.draw_int_value(mode, Color::WHITE, Color::BG_BLACK, 3, 5, 6, 255).unwrap();

        assert_eq!(
            panel.frames(),
            vec![vec![
                0x14, 0xB1, 0xFF, 0xFF, 0x08, 0x41, 3, 0, 0x00, 0x05, 0x00, 0x06, 0, 0, 0, 0, 0, 0, 0,
                0xFF
            ]]
        );
    }

    #[test]
    fn unsigned_int_rejects_negative() {
        let (mut display, panel) = display();
        let mode = NumberMode::new(false, false, false, FontSize::Font8x16);
        let result = display.draw_int_value(mode, Color::WHITE, Color::BLACK, 3, 0, 0, -1);

        assert!(matches!(result, Err(DisplayError::FieldOverflow { width: FieldWidth::Double, .. })));
        assert!(panel.writes().is_empty());
    }

    #[test]
    fn signed_int_is_twos_complement() {
        let (mut display, panel) = display();
        let mode = NumberMode { signed: true, ..NumberMode::new(false, false, false, FontSize::Font6x12) };
        display.draw_int_value(mode, Color::WHITE, Color::BLACK, 3, 0, 0, -2).unwrap();

        let frame = &panel.frames()[0];
        assert_eq!(frame[1], 0x40);
        assert_eq!(&frame[12..], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]);
    }

    #[test]
    fn float_value_is_long_field() {
        let (mut display, panel) = display();
        let mode = NumberMode::new(false, false, false, FontSize::Font8x16);
        display.draw_float_value(mode, Color::WHITE, Color::BLACK, 3, 2, 7, 8, 1234).unwrap();

        assert_eq!(
            panel.frames(),
            vec![vec![
                0x14, 0x01, 0xFF, 0xFF, 0x00, 0x00, 3, 2, 0x00, 0x07, 0x00, 0x08, 0x00, 0x00, 0x04,
                0xD2
            ]]
        );
    }

    #[test]
    fn signed_float_negative_draws_minus_then_magnitude() {
        let (mut display, panel) = display();
        display
            .draw_signed_float(false, FontSize::Font8x16, Color::WHITE, Color::BLACK, 3, 1, 100, 50, -125)
            .unwrap();

        let frames = panel.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], vec![0x11, 0x81, 0xFF, 0xFF, 0x00, 0x00, 0x00, 94, 0x00, 47, b'-']);
        assert_eq!(frames[1][0], 0x14);
        assert_eq!(frames[1][1], 0x01);
        assert_eq!(&frames[1][12..], &[0x00, 0x00, 0x00, 125]);
    }

    #[test]
    fn signed_float_non_negative_draws_blank_sign() {
        let (mut display, panel) = display();
        display
            .draw_signed_float(true, FontSize::Font8x16, Color::WHITE, Color::BLACK, 3, 1, 100, 50, 125)
            .unwrap();

        let frames = panel.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].last(), Some(&b' '));
        assert_eq!(&frames[0][6..10], &[0x00, 94, 0x00, 47]);
        assert_eq!(&frames[1][12..], &[0x00, 0x00, 0x00, 125]);
    }

    #[test]
    fn signed_float_out_of_range_sends_nothing() {
        let (mut display, panel) = display();
        let result = display.draw_signed_float(
            false,
            FontSize::Font8x16,
            Color::WHITE,
            Color::BLACK,
            3,
            1,
            100,
            50,
            -5_000_000_000,
        );

        assert!(matches!(result, Err(DisplayError::FieldOverflow { width: FieldWidth::Long, .. })));
        assert!(panel.writes().is_empty());
    }

    #[test]
    fn signed_float_sign_off_screen_sends_nothing() {
        let (mut display, panel) = display();
        let result =
            display.draw_signed_float(false, FontSize::Font8x16, Color::WHITE, Color::BLACK, 3, 1, 2, 50, -125);

        assert!(matches!(result, Err(DisplayError::FieldOverflow { width: FieldWidth::Word, .. })));
        assert!(panel.writes().is_empty());
    }

    #[test]
    fn icon_position_clamped_to_screen() {
        let (mut display, panel) = display();
        display.draw_icon(true, 9, 0x0102, 272, 480).unwrap();
        display.draw_icon(false, 9, 0x0102, 10, 20).unwrap();

        let frames = panel.frames();
        assert_eq!(frames[0], vec![0x23, 0x01, 0x0F, 0x01, 0xDF, 9, 0x01, 0x02]);
        assert_eq!(frames[1], vec![0x23, 0x00, 0x0A, 0x00, 0x14, 9, 0x01, 0x02]);
    }

    #[test]
    fn image_and_jpeg_share_frame() {
        let (mut display, panel) = display();
        display.draw_image(3).unwrap();
        display.jpeg_show_and_cache(3).unwrap();

        assert_eq!(panel.frames(), vec![vec![0x22, 0x00, 0x03], vec![0x22, 0x00, 0x03]]);
    }

    #[test]
    fn move_area_sets_translation_bit() {
        let (mut display, panel) = display();
        display.move_screen_area(Direction::Down, 8, Color::BG_BLACK, 0, 0, 271, 100).unwrap();

        assert_eq!(
            panel.frames(),
            vec![vec![
                0x09, 0x83, 0x00, 0x08, 0x08, 0x41, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0F, 0x00, 0x64
            ]]
        );
    }

    #[test]
    fn backlight_floor() {
        let (mut display, panel) = display();
        display.set_backlight_brightness(0x00).unwrap();
        display.set_backlight_brightness(0x40).unwrap();

        assert_eq!(panel.frames(), vec![vec![0x30, 0x1F], vec![0x30, 0x40]]);
    }

    #[test]
    fn orientation_and_refresh() {
        let (mut display, panel) = display();
        display.frame_set_dir(Rotation::Deg270).unwrap();
        display.update_lcd().unwrap();

        assert_eq!(panel.frames(), vec![vec![0x34, 0x5A, 0xA5, 0x03], vec![0x3D]]);
    }

    #[test]
    fn circle_emits_one_point_command_per_point() {
        let (mut display, panel) = display();
        display.draw_circle(Color::SELECT, 100, 100, 10).unwrap();

        let frames = panel.frames();
        assert_eq!(frames.len(), 64);
        assert!(frames.iter().all(|f| f[0] == 0x51 && f[3] == 1 && f[4] == 1));
    }

    #[test]
    fn fill_circle_uses_two_pixel_points() {
        let (mut display, panel) = display();
        display.fill_circle(Color::SELECT, 100, 100, 5).unwrap();

        let frames = panel.frames();
        assert_eq!(frames.len(), 72);
        assert!(frames.iter().all(|f| f[3] == 2 && f[4] == 2));
    }

    #[test]
    fn circle_crossing_edge_sends_nothing() {
        let (mut display, panel) = display();
        let result = display.draw_circle(Color::SELECT, 3, 100, 10);

        assert!(matches!(result, Err(DisplayError::FieldOverflow { width: FieldWidth::Word, .. })));
        assert!(panel.writes().is_empty());
    }

    #[test]
    fn fill_circle_crossing_edge_sends_nothing() {
        let (mut display, panel) = display();
        let result = display.fill_circle(Color::SELECT, 100, 2, 5);

        assert!(matches!(result, Err(DisplayError::FieldOverflow { .. })));
        assert!(panel.writes().is_empty());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("abc", 2), "ab");
        assert_eq!(truncate_chars("ab", 2), "ab");
        assert_eq!(truncate_chars("°°°", 1), "°");
    }

    proptest! {
        #[test]
        fn prop_backlight_never_below_floor(level in any::<u8>()) {
            let (mut display, panel) = display();
            display.set_backlight_brightness(level).unwrap();
            let frames = panel.frames();
            prop_assert_eq!(frames[0][1], level.max(0x1F));
        }

        #[test]
        fn prop_icon_never_off_screen(x in 0i32..5000, y in 0i32..5000) {
            let (mut display, panel) = display();
            display.draw_icon(false, 0, 0, x, y).unwrap();
            let frame = &panel.frames()[0];
            let sent_x = i32::from(u16::from_be_bytes([frame[1], frame[2]]));
            let sent_y = i32::from(u16::from_be_bytes([frame[3], frame[4]]));
            prop_assert_eq!(sent_x, x.min(271));
            prop_assert_eq!(sent_y, y.min(479));
        }

        #[test]
        fn prop_signed_long_round_trip(value in i64::from(i32::MIN)..=i64::from(i32::MAX)) {
            let mode = NumberMode { signed: true, ..NumberMode::new(false, false, false, FontSize::Font6x12) };
            let encoded = value_field(mode, FieldWidth::Long, value).unwrap();
            prop_assert_eq!(encoded as u32 as i32, value as i32);
        }
    }
}
