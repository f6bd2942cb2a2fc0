use deck::core::action::{Action, Effect, update};
use deck::core::deck_file::{parse_deck, to_toml};
use deck::core::state::App;
use deck::{Deck, DeckError, Move, Navigator, Viewport, structure};

// ============================================================================
// Helper Functions
// ============================================================================

/// Viewport that records every programmatic scroll it receives
#[derive(Default)]
struct ScrollLog {
    snap: usize,
    scrolls: Vec<usize>,
}

impl Viewport for ScrollLog {
    fn scroll_to(&mut self, index: usize) {
        self.snap = index;
        self.scrolls.push(index);
    }

    fn selected_snap(&self) -> usize {
        self.snap
    }
}

fn step(nav: &mut Navigator, viewport: &mut ScrollLog, request: Move) -> usize {
    nav.apply(request, Some(viewport))
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_walk_through_builtin_deck() {
    let deck = Deck::builtin();
    let mut nav = Navigator::new(deck.len());
    let mut viewport = ScrollLog::default();

    assert_eq!(nav.position_label(), "Slide 1 / 7");
    assert_eq!(step(&mut nav, &mut viewport, Move::By(1)), 1);
    assert_eq!(step(&mut nav, &mut viewport, Move::By(1)), 2);
    assert_eq!(nav.position_label(), "Slide 3 / 7");
    assert_eq!(step(&mut nav, &mut viewport, Move::Last), 6);
    assert_eq!(step(&mut nav, &mut viewport, Move::By(1)), 6);
    assert_eq!(nav.position_label(), "Slide 7 / 7");
    assert_eq!(step(&mut nav, &mut viewport, Move::First), 0);
    assert_eq!(step(&mut nav, &mut viewport, Move::By(-1)), 0);

    assert_eq!(viewport.scrolls, vec![1, 2, 6, 6, 0, 0]);
}

#[test]
fn test_user_swipe_is_adopted_without_echo() {
    let mut nav = Navigator::new(Deck::builtin().len());
    let mut viewport = ScrollLog::default();

    viewport.snap = 4;
    assert_eq!(nav.on_viewport_select(viewport.selected_snap()), 4);
    assert!(viewport.scrolls.is_empty());

    assert_eq!(step(&mut nav, &mut viewport, Move::By(-1)), 3);
    assert_eq!(viewport.scrolls, vec![3]);
}

#[test]
fn test_update_reports_moves_and_quit() {
    let mut app = App::new(Deck::builtin());
    let mut viewport = ScrollLog::default();

    assert_eq!(
        update(&mut app, Action::Navigate(Move::By(-1)), Some(&mut viewport)),
        Effect::None
    );
    assert_eq!(
        update(&mut app, Action::JumpTo(5), Some(&mut viewport)),
        Effect::Moved(5)
    );
    assert_eq!(app.current_slide().title, "Using Memories and Notepad");
    assert_eq!(update(&mut app, Action::Quit, None), Effect::Quit);
}

// ============================================================================
// Body Structuring
// ============================================================================

#[test]
fn test_structure_objective_and_coverage() {
    let body = structure(&[
        "Objective: Surface lesser-known Cursor features.",
        "Coverage:",
        "Context methods.",
        "Persistent knowledge.",
    ]);
    assert_eq!(body.intro, vec!["Objective: Surface lesser-known Cursor features."]);
    assert_eq!(body.sections.len(), 1);
    assert_eq!(body.sections[0].heading, "Coverage");
    assert_eq!(
        body.sections[0].items,
        vec!["Context methods.", "Persistent knowledge."]
    );
}

#[test]
fn test_structure_leading_heading() {
    let body = structure(&["Memories:", "Store conventions.", "Applied across chats."]);
    assert!(body.intro.is_empty());
    assert_eq!(body.sections[0].heading, "Memories");
    assert_eq!(body.sections[0].items.len(), 2);
}

// ============================================================================
// Deck Files
// ============================================================================

#[test]
fn test_deck_file_round_trip() {
    let exported = to_toml(&Deck::builtin()).unwrap();
    let reloaded = parse_deck(&exported).unwrap();
    assert_eq!(reloaded.slides(), Deck::builtin().slides());
}

#[test]
fn test_deck_file_errors() {
    assert!(matches!(parse_deck(""), Err(DeckError::Empty)));
    assert!(matches!(
        parse_deck("[[slides]]\ntitle = \"\"\n"),
        Err(DeckError::UntitledSlide(0))
    ));
    assert!(matches!(
        parse_deck("[[slides]]\ntitle = 3\n"),
        Err(DeckError::Parse(_))
    ));
}
