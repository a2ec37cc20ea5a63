//! Drives the shell headlessly with raw pointer input

use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

use dash_core::{ChartKind, DashboardController};
use dash_data::{Dataset, FieldCatalog};
use dash_ui::{AppShell, ShellConfig};

const SCREEN: Vec2 = Vec2::new(1280.0, 800.0);
const CHIP_X: f32 = 60.0;
const CARD_POS: Pos2 = Pos2::new(400.0, 260.0);
const SIDEBAR_GAP: Pos2 = Pos2::new(CHIP_X, 700.0);

struct Harness {
    ctx: Context,
    shell: AppShell,
    controller: DashboardController,
    dataset: Dataset,
}

impl Harness {
    /// Dashboard with a single bar chart, laid out once
    fn with_bar_chart() -> Self {
        let mut harness = Self {
            ctx: Context::default(),
            shell: AppShell::new(ShellConfig::default(), FieldCatalog::sample()),
            controller: DashboardController::default(),
            dataset: Dataset::sample().unwrap(),
        };
        harness.controller.add_chart(ChartKind::Bar);
        harness.frame(Vec::new());
        harness
    }

    fn frame(&mut self, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            events,
            ..Default::default()
        };
        let Self {
            ctx,
            shell,
            controller,
            dataset,
        } = self;
        let _ = ctx.run(input, |ctx| shell.show(ctx, controller, dataset));
    }

    fn press(&mut self, pos: Pos2) {
        self.frame(vec![Event::PointerMoved(pos), button(pos, true)]);
    }

    fn move_to(&mut self, pos: Pos2) {
        self.frame(vec![Event::PointerMoved(pos)]);
    }

    fn release(&mut self, pos: Pos2) {
        self.frame(vec![Event::PointerMoved(pos), button(pos, false)]);
    }

    fn dragged(&self) -> Option<String> {
        self.controller.dragged_field().map(|d| d.field.clone())
    }

    fn axes(&self) -> (String, String) {
        let config = &self.controller.dashboard().items()[0].config;
        (config.x_axis.clone(), config.y_axis.clone())
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Find where the chip for `field` sits by pressing down the sidebar
fn chip_position(field: &str) -> Pos2 {
    (0..SIDEBAR_GAP.y as i32)
        .step_by(4)
        .map(|y| Pos2::new(CHIP_X, y as f32))
        .find(|&pos| {
            let mut harness = Harness::with_bar_chart();
            harness.press(pos);
            harness.dragged().as_deref() == Some(field)
        })
        .unwrap_or_else(|| panic!("no chip for '{}'", field))
}

#[test]
fn test_drop_dimension_on_card() {
    let chip = chip_position("region");
    let mut harness = Harness::with_bar_chart();

    harness.press(chip);
    assert_eq!(harness.dragged().as_deref(), Some("region"));

    harness.move_to(CARD_POS);
    harness.release(CARD_POS);

    assert_eq!(harness.axes(), ("region".to_string(), "sales".to_string()));
    assert!(harness.dragged().is_none());
}

#[test]
fn test_drop_measure_on_card() {
    let chip = chip_position("profit");
    let mut harness = Harness::with_bar_chart();

    harness.press(chip);
    harness.move_to(CARD_POS);
    harness.release(CARD_POS);

    assert_eq!(harness.axes(), ("name".to_string(), "profit".to_string()));
    assert!(harness.dragged().is_none());
}

#[test]
fn test_release_over_sidebar_cancels() {
    let chip = chip_position("category");
    let mut harness = Harness::with_bar_chart();

    harness.press(chip);
    assert!(harness.dragged().is_some());

    harness.move_to(SIDEBAR_GAP);
    harness.release(SIDEBAR_GAP);

    assert!(harness.dragged().is_none());
    assert_eq!(harness.axes(), ("name".to_string(), "sales".to_string()));
}

#[test]
fn test_click_on_chip_leaves_no_drag() {
    let chip = chip_position("customers");
    let mut harness = Harness::with_bar_chart();

    harness.frame(vec![Event::PointerMoved(chip), button(chip, true), button(chip, false)]);

    assert!(harness.dragged().is_none());
    assert_eq!(harness.axes(), ("name".to_string(), "sales".to_string()));
}
