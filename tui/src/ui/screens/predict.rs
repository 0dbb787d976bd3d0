use classifier::{FeatureRecord, ModelStore};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets::{self, NumberField};

use super::Action;

/// Species photos shown after a successful prediction.
const SPECIES_IMAGES: &[(&str, &str)] = &[
    (
        "Iris-setosa",
        "https://upload.wikimedia.org/wikipedia/commons/5/56/Kosaciec_szczecinkowaty_Iris_setosa.jpg",
    ),
    (
        "Iris-versicolor",
        "https://upload.wikimedia.org/wikipedia/commons/4/41/Iris_versicolor_3.jpg",
    ),
    (
        "Iris-virginica",
        "https://upload.wikimedia.org/wikipedia/commons/9/9f/Iris_virginica.jpg",
    ),
];

const MIN_CM: f32 = 0.1;
const MAX_CM: f32 = 10.0;
const STEP_CM: f32 = 0.1;

const MODEL_ABSENT: &str = "Model not loaded.";

/// Outcome of the last trigger, rendered in the result region.
pub enum Outcome {
    Idle,
    Predicted {
        label: String,
        image: Option<&'static str>,
    },
    Failed(String),
}

pub struct PredictState {
    store: ModelStore,
    pub fields: [NumberField; 4],
    pub focus: usize,
    pub outcome: Outcome,
    /// Load failure surfaced before the first trigger, if any.
    pub load_error: Option<String>,
}

impl PredictState {
    /// Builds the form and polls the store once so a failed load is visible
    /// before the first trigger. The store caches the outcome either way.
    pub fn new(store: ModelStore) -> Self {
        let load_error = store.get().err().map(|e| e.to_string());

        Self {
            store,
            fields: [
                NumberField::new("Sepal Length (cm)", MIN_CM, MAX_CM, STEP_CM, 5.1),
                NumberField::new("Sepal Width (cm)", MIN_CM, MAX_CM, STEP_CM, 3.5),
                NumberField::new("Petal Length (cm)", MIN_CM, MAX_CM, STEP_CM, 1.4),
                NumberField::new("Petal Width (cm)", MIN_CM, MAX_CM, STEP_CM, 0.2),
            ],
            focus: 0,
            outcome: Outcome::Idle,
            load_error,
        }
    }

    fn record(&self) -> FeatureRecord {
        FeatureRecord::new(
            self.fields[0].value(),
            self.fields[1].value(),
            self.fields[2].value(),
            self.fields[3].value(),
        )
    }
}

pub fn handle_key(state: &mut PredictState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up | KeyCode::BackTab => {
            state.focus = (state.focus + state.fields.len() - 1) % state.fields.len();
            Action::None
        }
        KeyCode::Down | KeyCode::Tab => {
            state.focus = (state.focus + 1) % state.fields.len();
            Action::None
        }
        KeyCode::Left => {
            state.fields[state.focus].decrement();
            Action::None
        }
        KeyCode::Right => {
            state.fields[state.focus].increment();
            Action::None
        }
        KeyCode::Backspace => {
            state.fields[state.focus].backspace();
            Action::None
        }
        KeyCode::Enter => {
            identify(state);
            Action::None
        }
        KeyCode::Char('o') => {
            open_image(state);
            Action::None
        }
        KeyCode::Char(c) => {
            state.fields[state.focus].push(c);
            Action::None
        }
        _ => Action::None,
    }
}

/// The trigger action: check model availability, build the feature record,
/// predict, stash the outcome for rendering. Synchronous and in-process; a
/// failure is terminal for this interaction.
fn identify(state: &mut PredictState) {
    let model = match state.store.get() {
        Ok(m) => m,
        Err(_) => {
            state.outcome = Outcome::Failed(MODEL_ABSENT.to_string());
            return;
        }
    };

    let record = state.record();
    let label = model.predict(&record).to_string();
    log::debug!("predicted '{label}' for {record:?}");

    let image = SPECIES_IMAGES
        .iter()
        .find(|(species, _)| *species == label)
        .map(|&(_, url)| url);

    state.outcome = Outcome::Predicted { label, image };
}

fn open_image(state: &PredictState) {
    if let Outcome::Predicted {
        label,
        image: Some(url),
    } = &state.outcome
    {
        log::info!("opening photo of {label}");
        if let Err(e) = open::that(url) {
            log::warn!("cannot open '{url}': {e}");
        }
    }
}

pub fn draw(f: &mut Frame, state: &PredictState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = layout::centered_rect(72, 92, area);
    let (header, form, result, footer) = layout::vertical(outer);

    draw_header(f, header);
    draw_form(f, form, state);
    draw_result(f, result, state);
    draw_footer(f, footer);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Iris Species Predictor", Theme::title())),
        Line::from(Span::styled(
            "Enter the measurements below to identify the species.",
            Theme::dim(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_form(f: &mut Frame, area: Rect, state: &PredictState) {
    let (sepal_col, petal_col) = layout::columns(area);
    let (sepal_len, sepal_wid) = layout::fields(sepal_col);
    let (petal_len, petal_wid) = layout::fields(petal_col);

    let areas = [sepal_len, sepal_wid, petal_len, petal_wid];
    for (i, (field, slot)) in state.fields.iter().zip(areas).enumerate() {
        widgets::field(f, slot, field, i == state.focus);
    }
}

fn draw_result(f: &mut Frame, area: Rect, state: &PredictState) {
    let (style, lines) = match &state.outcome {
        Outcome::Idle => match &state.load_error {
            Some(msg) => (Theme::error(), vec![Line::from(msg.as_str())]),
            None => (
                Theme::dim(),
                vec![Line::from("Press enter to identify the species.")],
            ),
        },
        Outcome::Predicted { label, image } => {
            let mut lines = vec![Line::from(vec![
                Span::styled("Predicted Species: ", Theme::text()),
                Span::styled(label.clone(), Theme::ok()),
            ])];
            if image.is_some() {
                lines.push(Line::from(Span::styled(
                    format!("[o]  open a photo of {label}"),
                    Theme::dim(),
                )));
            }
            (Theme::ok(), lines)
        }
        Outcome::Failed(msg) => (Theme::error(), vec![Line::from(msg.as_str())]),
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(" Result ")
                    .title_style(style),
            )
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    widgets::hints(
        f,
        rows[0],
        &[
            ("↑↓ / tab", "field"),
            ("←→", "adjust"),
            ("enter", "identify"),
            ("q", "quit"),
        ],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Support Vector Machine (linear kernel)",
            Theme::muted(),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
}
