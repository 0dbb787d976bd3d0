use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// A bounded numeric input field.
///
/// The buffer only ever holds digits and at most one dot; `value()` falls
/// back to the default on an unparsable buffer and clamps into the
/// configured range, so an out-of-range number cannot leave the widget.
pub struct NumberField {
    pub label: &'static str,
    min: f32,
    max: f32,
    step: f32,
    default: f32,
    buffer: String,
}

impl NumberField {
    pub fn new(label: &'static str, min: f32, max: f32, step: f32, default: f32) -> Self {
        Self {
            label,
            min,
            max,
            step,
            default,
            buffer: format_value(default),
        }
    }

    /// Current numeric value: parsed, defaulted, clamped.
    pub fn value(&self) -> f32 {
        let parsed = self.buffer.parse::<f32>().unwrap_or(self.default);
        parsed.clamp(self.min, self.max)
    }

    /// Steps the value up, saturating at the upper bound.
    pub fn increment(&mut self) {
        self.set(self.value() + self.step);
    }

    /// Steps the value down, saturating at the lower bound.
    pub fn decrement(&mut self) {
        self.set(self.value() - self.step);
    }

    /// Appends one typed character, ignoring anything that could not be part
    /// of a decimal number.
    pub fn push(&mut self, c: char) {
        let dot_ok = c == '.' && !self.buffer.contains('.');
        if c.is_ascii_digit() || dot_ok {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    fn set(&mut self, v: f32) {
        self.buffer = format_value(v.clamp(self.min, self.max));
    }
}

fn format_value(v: f32) -> String {
    format!("{v:.1}")
}

/// Renders one input field box, with a block cursor when focused.
pub fn field(f: &mut Frame, area: Rect, field: &NumberField, focused: bool) {
    let border = if focused {
        Theme::focus()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", field.label))
        .title_style(if focused { Theme::focus() } else { Theme::dim() });

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::styled(field.text().to_string(), Theme::text())];
    if focused {
        spans.push(Span::styled("█", Theme::focus()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Renders a centered key-hint line.
pub fn hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, Theme::dim()));
        spans.push(Span::styled(format!("  {action}    "), Theme::muted()));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> NumberField {
        NumberField::new("Sepal Length (cm)", 0.1, 10.0, 0.1, 5.1)
    }

    #[test]
    fn starts_at_the_default() {
        let f = field();
        assert_eq!(f.value(), 5.1);
        assert_eq!(f.text(), "5.1");
    }

    #[test]
    fn stepping_saturates_at_the_bounds() {
        let mut f = field();
        for _ in 0..200 {
            f.increment();
        }
        assert_eq!(f.value(), 10.0);

        for _ in 0..200 {
            f.decrement();
        }
        assert_eq!(f.value(), 0.1);
    }

    #[test]
    fn typed_input_replaces_the_value() {
        let mut f = field();
        for _ in 0..f.text().len() {
            f.backspace();
        }
        for c in "6.3".chars() {
            f.push(c);
        }
        assert_eq!(f.value(), 6.3);
    }

    #[test]
    fn rejects_anything_but_digits_and_one_dot() {
        let mut f = field();
        f.push('x');
        f.push('-');
        assert_eq!(f.text(), "5.1");

        // second dot ignored
        f.push('.');
        assert_eq!(f.text(), "5.1");
    }

    #[test]
    fn unparsable_buffer_falls_back_to_the_default() {
        let mut f = field();
        for _ in 0..f.text().len() {
            f.backspace();
        }
        assert_eq!(f.text(), "");
        assert_eq!(f.value(), 5.1);
    }

    #[test]
    fn out_of_range_typed_values_clamp() {
        let mut f = field();
        for _ in 0..f.text().len() {
            f.backspace();
        }
        for c in "99.9".chars() {
            f.push(c);
        }
        assert_eq!(f.value(), 10.0);
    }

    #[test]
    fn boundary_values_are_accepted_verbatim() {
        let mut f = field();
        for _ in 0..f.text().len() {
            f.backspace();
        }
        for c in "0.1".chars() {
            f.push(c);
        }
        assert_eq!(f.value(), 0.1);

        for _ in 0..f.text().len() {
            f.backspace();
        }
        for c in "10.0".chars() {
            f.push(c);
        }
        assert_eq!(f.value(), 10.0);
    }
}
