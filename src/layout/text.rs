/// Pixels the title block is raised above the vertical canvas center.
const TITLE_RAISE_PX: i32 = 120;
/// Pixels the caption's floor anchor is raised above the canvas center.
const CAPTION_RAISE_PX: i32 = 20;
/// Minimum vertical gap between the title block and the caption block.
const BLOCK_GAP_PX: i32 = 30;

/// Vertical anchors for the two text blocks of a composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextAnchors {
    /// Top of the first title line.
    pub title_y: i32,
    /// Top of the first caption line.
    pub caption_y: i32,
}

/// Split `text` into rendered lines no wider than `max_width_px`.
///
/// Explicit newlines are honored first; within each segment, words are
/// packed greedily while the measured width stays under the limit. A word
/// that alone exceeds the limit becomes its own line rather than being
/// broken. Blank segments produce no line. `measure` reports the rendered
/// pixel width of a candidate line for the active font and size, which makes
/// the result deterministic for a fixed font.
pub fn wrap_text(text: &str, max_width_px: u32, measure: impl Fn(&str) -> u32) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let mut current = String::new();
        for word in segment.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) < max_width_px {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Stack the title and caption blocks without overlap.
///
/// The title is anchored near the vertical center, raised by a fixed
/// amount; the caption starts below the title end with a guaranteed minimum
/// gap, but never above its own center-relative anchor.
pub fn stack_blocks(
    title_lines: usize,
    line_height_title: u32,
    canvas_height: u32,
) -> TextAnchors {
    let center = canvas_height as i32 / 2;
    let title_y = center - TITLE_RAISE_PX;
    let title_end = title_y + title_lines as i32 * line_height_title as i32;
    TextAnchors {
        title_y,
        caption_y: (title_end + BLOCK_GAP_PX).max(center - CAPTION_RAISE_PX),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
