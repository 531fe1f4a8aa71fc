//! TUI application state and logic

use crate::game::{
    Board, BoardScroll, Game, GameStatus, GuessError, Key, KeyboardLayout, MAX_ROWS,
    ScrollDirection, SubmitOutcome,
};
use crate::preferences::Preferences;
use crate::reveal::{
    Clock, RevealEvent, RevealRequest, RevealSequencer, RevealTimer, SystemClock, TimerId,
    TimerQueue,
};
use crate::vocabulary::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// How long the last typed tile stays emphasised
pub const PULSE_DURATION: Duration = Duration::from_millis(250);

/// How long the status line keeps announcing after a row is revealed
pub const ANNOUNCEMENT_DURATION: Duration = Duration::from_secs(1);

/// Idle poll interval when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Everything the event loop waits for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTimer {
    Reveal(RevealTimer),
    ToastExpired,
    PulseEnd,
    AnnouncementExpired,
}

impl From<RevealTimer> for AppTimer {
    fn from(timer: RevealTimer) -> Self {
        Self::Reveal(timer)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=6
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    pub fn record(&mut self, status: GameStatus, guesses: usize) {
        match status {
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.total_games += 1,
            GameStatus::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App<P: WordProvider, C: Clock = SystemClock> {
    provider: P,
    /// `None` when the vocabulary is empty
    pub game: Option<Game>,
    pub sequencer: RevealSequencer,
    timers: TimerQueue<AppTimer, C>,
    pub preferences: Preferences,
    pub layout: KeyboardLayout,
    pub toast: Option<String>,
    toast_timer: Option<TimerId>,
    /// Cell emphasised after typing
    pub pulse: Option<(usize, usize)>,
    pulse_timer: Option<TimerId>,
    /// Whether the status line reads out the last revealed tile
    pub announce: bool,
    announce_timer: Option<TimerId>,
    /// Manual board scroll, dropped whenever typing moves the focus
    pub scroll: Option<BoardScroll>,
    pub show_modal: bool,
    pub stats: Statistics,
    /// Last frame size, used for mouse hit-testing
    pub area: Rect,
    pub should_quit: bool,
}

impl<P: WordProvider> App<P, SystemClock> {
    #[must_use]
    pub fn new(provider: P, preferences: Preferences) -> Self {
        Self::with_clock(provider, preferences, SystemClock::new())
    }
}

impl<P: WordProvider, C: Clock> App<P, C> {
    /// Build an app with its first game already started
    #[must_use]
    pub fn with_clock(provider: P, preferences: Preferences, clock: C) -> Self {
        let layout = KeyboardLayout::from_alphabet(provider.alphabet());
        let mut app = Self {
            provider,
            game: None,
            sequencer: RevealSequencer::new(),
            timers: TimerQueue::with_clock(clock),
            preferences,
            layout,
            toast: None,
            toast_timer: None,
            pulse: None,
            pulse_timer: None,
            announce: false,
            announce_timer: None,
            scroll: None,
            show_modal: false,
            stats: Statistics::default(),
            area: Rect::default(),
            should_quit: false,
        };
        app.new_game();
        app
    }

    pub fn new_game(&mut self) {
        self.sequencer.reveal_row(RevealRequest::Reset, &mut self.timers);
        self.clear_toast();
        self.clear_pulse();
        self.clear_announcement();
        self.scroll = None;
        self.show_modal = false;

        self.game = self.provider.random_word().map(|word| {
            let definition = self.provider.definition(&word);
            Game::new(word, definition)
        });
        if self.game.is_none() {
            tracing::warn!("vocabulary is empty, nothing to play");
        }
    }

    /// Shared entry point for physical keys and on-screen buttons
    pub fn press_key(&mut self, key: Key) {
        if self.show_modal {
            if key == Key::Enter {
                self.new_game();
            }
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match key {
            Key::Letter(letter) => {
                if game.type_letter(letter) {
                    self.scroll = None;
                    self.pulse_last_tile();
                }
            }
            Key::Backspace => {
                if game.delete_letter() {
                    self.scroll = None;
                    self.pulse_last_tile();
                }
            }
            Key::Enter => self.submit(),
        }
    }

    fn submit(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.submit() {
            Ok(SubmitOutcome::Committed { row }) => {
                let request = RevealRequest::Row {
                    row,
                    guess: game.row(row).unwrap_or_default(),
                    target: game.target(),
                };
                self.sequencer.reveal_row(request, &mut self.timers);
                self.clear_pulse();
                self.clear_announcement();
                self.announce = true;
                self.scroll = None;
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(err @ GuessError::LengthMismatch { .. }) => {
                let row = game.current_row();
                self.show_toast(err.to_string());
                self.sequencer.shake_row(row, &mut self.timers);
            }
        }
    }

    /// Fire every due timer
    pub fn tick(&mut self) {
        while let Some(timer) = self.timers.pop_due() {
            match timer {
                AppTimer::Reveal(timer) => {
                    if let Some(RevealEvent::RowComplete { row }) =
                        self.sequencer.on_timer(timer, &mut self.timers)
                    {
                        self.on_row_revealed(row);
                    }
                }
                AppTimer::ToastExpired => {
                    self.toast = None;
                    self.toast_timer = None;
                }
                AppTimer::PulseEnd => {
                    self.pulse = None;
                    self.pulse_timer = None;
                }
                AppTimer::AnnouncementExpired => {
                    self.announce = false;
                    self.announce_timer = None;
                }
            }
        }
    }

    fn on_row_revealed(&mut self, row: usize) {
        self.announce_timer = Some(
            self.timers
                .schedule(ANNOUNCEMENT_DURATION, AppTimer::AnnouncementExpired),
        );
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let status = game.complete_reveal();
        if status != GameStatus::InProgress {
            tracing::info!(row, ?status, "game over");
            self.stats.record(status, game.guesses_used());
            self.show_modal = true;
        }
    }

    /// Time until the next timer is due
    #[must_use]
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Left => self.scroll_board(ScrollDirection::Left),
                KeyCode::Right => self.scroll_board(ScrollDirection::Right),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Esc if self.show_modal => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                self.press_key(Key::Letter(c.to_ascii_uppercase()));
            }
            KeyCode::Enter => self.press_key(Key::Enter),
            KeyCode::Backspace => self.press_key(Key::Backspace),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(key) =
            super::rendering::key_at(self.area, &self.layout, mouse.column, mouse.row)
        {
            self.press_key(key);
            return;
        }
        let Some(total) = self.game.as_ref().map(|game| game.target().len()) else {
            return;
        };
        if let Some(direction) = super::rendering::scroll_arrow_at(
            self.area,
            &self.layout,
            total,
            mouse.column,
            mouse.row,
        ) {
            self.scroll_board(direction);
        }
    }

    /// Move the board view one column, when the word is wider than the screen
    pub fn scroll_board(&mut self, direction: ScrollDirection) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let board = Board::new(game, &self.sequencer);
        let visible =
            super::rendering::visible_board_columns(self.area, &self.layout, board.columns());
        if let Some(scroll) = board.scroll(visible, self.scroll, direction) {
            self.scroll = Some(scroll);
        }
    }

    pub fn toggle_theme(&mut self) {
        if let Err(err) = self.preferences.toggle_dark_mode() {
            tracing::warn!(%err, "could not save theme preference");
        }
    }

    fn show_toast(&mut self, text: String) {
        self.clear_toast();
        self.toast = Some(text);
        self.toast_timer = Some(self.timers.schedule(TOAST_DURATION, AppTimer::ToastExpired));
    }

    fn clear_toast(&mut self) {
        if let Some(id) = self.toast_timer.take() {
            self.timers.cancel(id);
        }
        self.toast = None;
    }

    fn start_pulse(&mut self, row: usize, column: usize) {
        self.clear_pulse();
        self.pulse = Some((row, column));
        self.pulse_timer = Some(self.timers.schedule(PULSE_DURATION, AppTimer::PulseEnd));
    }

    fn clear_pulse(&mut self) {
        if let Some(id) = self.pulse_timer.take() {
            self.timers.cancel(id);
        }
        self.pulse = None;
    }

    /// Emphasise the last letter of the active row, or nothing if it is empty
    fn pulse_last_tile(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let row = game.current_row();
        let typed = Board::new(game, &self.sequencer).active_typing_index();
        match typed {
            Some(column) => self.start_pulse(row, column),
            None => self.clear_pulse(),
        }
    }

    fn clear_announcement(&mut self) {
        if let Some(id) = self.announce_timer.take() {
            self.timers.cancel(id);
        }
        self.announce = false;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordProvider>(app: App<P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "terminal UI failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, P, C>(terminal: &mut Terminal<B>, mut app: App<P, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: WordProvider,
    C: Clock,
{
    loop {
        terminal.draw(|f| {
            app.area = f.area();
            super::rendering::ui(f, &app);
        })?;

        let timeout = app.time_until_next_timer().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;
    use crate::game::Phase;
    use crate::preferences::MemoryStore;
    use crate::reveal::ManualClock;
    use crate::vocabulary::WordEntry;

    /// Provider that hands out a fixed sequence of words
    struct FixedWords {
        words: Vec<&'static str>,
        next: usize,
    }

    impl WordProvider for FixedWords {
        fn random_word(&mut self) -> Option<TargetWord> {
            let word = self.words.get(self.next % self.words.len().max(1))?;
            self.next += 1;
            TargetWord::new(word).ok()
        }

        fn definition(&self, word: &TargetWord) -> String {
            format!("meaning of {word}")
        }

        fn alphabet(&self) -> Vec<char> {
            self.words
                .iter()
                .flat_map(|w| w.chars())
                .filter(char::is_ascii_alphabetic)
                .collect()
        }
    }

    fn app(words: &[&'static str]) -> (ManualClock, App<FixedWords, ManualClock>) {
        let clock = ManualClock::new();
        let provider = FixedWords {
            words: words.to_vec(),
            next: 0,
        };
        let preferences = Preferences::init(Box::new(MemoryStore::new(None)), false);
        let app = App::with_clock(provider, preferences, clock.clone());
        (clock, app)
    }

    fn type_word<C: Clock>(app: &mut App<FixedWords, C>, letters: &str) {
        for letter in letters.chars() {
            app.press_key(Key::Letter(letter));
        }
    }

    /// Let every pending timer fire
    fn settle(clock: &ManualClock, app: &mut App<FixedWords, ManualClock>) {
        for _ in 0..100 {
            clock.advance(Duration::from_millis(100));
            app.tick();
        }
    }

    /// Step the clock until `done` holds, for at most ten seconds
    fn settle_until(
        clock: &ManualClock,
        app: &mut App<FixedWords, ManualClock>,
        done: impl Fn(&App<FixedWords, ManualClock>) -> bool,
    ) {
        for _ in 0..100 {
            if done(app) {
                return;
            }
            clock.advance(Duration::from_millis(100));
            app.tick();
        }
        panic!("condition not reached");
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn starts_with_a_game_and_definition() {
        let (_, app) = app(&["sipu"]);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.target().text(), "SIPU");
        assert_eq!(game.definition(), "meaning of SIPU");
    }

    #[test]
    fn winning_guess_opens_modal_after_reveal() {
        let (clock, mut app) = app(&["sipu"]);
        type_word(&mut app, "SIPU");
        app.press_key(Key::Enter);

        assert!(!app.show_modal);
        assert!(matches!(
            app.game.as_ref().unwrap().phase(),
            Phase::Revealing { row: 0 }
        ));

        settle(&clock, &mut app);
        assert!(app.show_modal);
        assert_eq!(app.game.as_ref().unwrap().status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn short_guess_shows_toast_and_shakes() {
        let (clock, mut app) = app(&["sipu"]);
        type_word(&mut app, "SI");
        app.press_key(Key::Enter);

        assert_eq!(app.toast.as_deref(), Some("Word must be 4 letters!"));
        assert_eq!(app.sequencer.shaking_row(), Some(0));
        assert_eq!(app.game.as_ref().unwrap().current_guess().text(), "SI");

        clock.advance(Duration::from_millis(600));
        app.tick();
        assert_eq!(app.sequencer.shaking_row(), None);
        assert!(app.toast.is_some());

        clock.advance(TOAST_DURATION);
        app.tick();
        assert!(app.toast.is_none());
    }

    #[test]
    fn typing_pulses_last_tile() {
        let (clock, mut app) = app(&["he nitis"]);
        type_word(&mut app, "HE");
        assert_eq!(app.pulse, Some((0, 1)));
        type_word(&mut app, "N");
        assert_eq!(app.pulse, Some((0, 3)));

        clock.advance(PULSE_DURATION);
        app.tick();
        assert_eq!(app.pulse, None);
    }

    #[test]
    fn backspace_pulses_new_last_tile() {
        let (clock, mut app) = app(&["he nitis"]);
        type_word(&mut app, "HEN");
        clock.advance(PULSE_DURATION);
        app.tick();
        assert_eq!(app.pulse, None);

        // The auto space stays, so E is the last letter
        app.press_key(Key::Backspace);
        assert_eq!(app.pulse, Some((0, 1)));

        app.press_key(Key::Backspace);
        app.press_key(Key::Backspace);
        assert_eq!(app.pulse, None);
    }

    #[test]
    fn announcement_expires_after_reveal() {
        let (clock, mut app) = app(&["sipu"]);
        assert!(!app.announce);
        type_word(&mut app, "UPIS");
        app.press_key(Key::Enter);
        assert!(app.announce);

        settle_until(&clock, &mut app, |app| {
            app.game.as_ref().unwrap().phase() == Phase::Typing { row: 1 }
        });
        assert!(app.announce);

        clock.advance(ANNOUNCEMENT_DURATION);
        app.tick();
        assert!(!app.announce);
    }

    #[test]
    fn alt_arrows_scroll_long_words() {
        let (_, mut app) = app(&["abcdefghijklmnopqrst"]);
        app.area = Rect::new(0, 0, 40, 30);
        type_word(&mut app, "ABCDEFGHIJKLMNOPQRST");

        let window = |app: &App<FixedWords, ManualClock>| {
            Board::new(app.game.as_ref().unwrap(), &app.sequencer).visible_columns(9, app.scroll)
        };
        assert_eq!(window(&app), 11..20);

        // Plain arrows do nothing
        app.handle_key_event(key(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(window(&app), 11..20);

        app.handle_key_event(key(KeyCode::Left, KeyModifiers::ALT));
        app.handle_key_event(key(KeyCode::Left, KeyModifiers::ALT));
        assert_eq!(window(&app), 9..18);
        app.handle_key_event(key(KeyCode::Right, KeyModifiers::ALT));
        assert_eq!(window(&app), 10..19);

        // Editing the row brings the focus back into view
        app.press_key(Key::Backspace);
        assert_eq!(app.scroll, None);
        assert_eq!(window(&app), 11..20);
    }

    #[test]
    fn input_is_ignored_while_revealing() {
        let (_, mut app) = app(&["sipu"]);
        type_word(&mut app, "UPIS");
        app.press_key(Key::Enter);
        type_word(&mut app, "S");
        app.press_key(Key::Backspace);

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.current_guess().text(), "UPIS");
        assert_eq!(game.row(0), Some("UPIS"));
    }

    #[test]
    fn modal_enter_starts_new_game() {
        let (clock, mut app) = app(&["sipu", "ahtu"]);
        type_word(&mut app, "SIPU");
        app.press_key(Key::Enter);
        settle(&clock, &mut app);
        assert!(app.show_modal);

        // Letters do nothing while the modal is up
        app.press_key(Key::Letter('A'));
        assert!(app.show_modal);

        app.press_key(Key::Enter);
        assert!(!app.show_modal);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.target().text(), "AHTU");
        assert_eq!(game.guesses_used(), 0);
        assert_eq!(app.sequencer.last_revealed(), None);
    }

    #[test]
    fn new_game_mid_reveal_drops_stale_steps() {
        let (clock, mut app) = app(&["sipu", "ahtu"]);
        type_word(&mut app, "SIPU");
        app.press_key(Key::Enter);
        app.handle_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL));

        settle(&clock, &mut app);
        assert!(!app.show_modal);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.target().text(), "AHTU");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn six_misses_lose() {
        let (clock, mut app) = app(&["sipu"]);
        for _ in 0..MAX_ROWS {
            type_word(&mut app, "UPIS");
            app.press_key(Key::Enter);
            settle(&clock, &mut app);
        }
        assert!(app.show_modal);
        assert_eq!(app.game.as_ref().unwrap().status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn key_events_map_to_keys() {
        let (_, mut app) = app(&["sipu"]);
        app.handle_key_event(key(KeyCode::Char('s'), KeyModifiers::NONE));
        app.handle_key_event(key(KeyCode::Char('i'), KeyModifiers::ALT));
        app.handle_key_event(key(KeyCode::Char('1'), KeyModifiers::NONE));
        assert_eq!(app.game.as_ref().unwrap().current_guess().text(), "S");

        app.handle_key_event(key(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(app.game.as_ref().unwrap().current_guess().is_empty());

        app.handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn theme_toggle_persists_in_preferences() {
        let (_, mut app) = app(&["sipu"]);
        assert!(!app.preferences.dark_mode());
        app.handle_key_event(key(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(app.preferences.dark_mode());
    }

    #[test]
    fn empty_vocabulary_ignores_input() {
        let (_, mut app) = app(&[]);
        assert!(app.game.is_none());
        type_word(&mut app, "ABC");
        app.press_key(Key::Enter);
        app.tick();
        assert!(app.game.is_none());
        assert!(app.toast.is_none());
    }

    #[test]
    fn random_provider_drives_the_app() {
        let entries = vec![WordEntry {
            word: TargetWord::new("ahas").unwrap(),
            definition: "Crow".to_string(),
        }];
        let provider = crate::vocabulary::RandomWordProvider::seeded(entries, 7);
        let preferences = Preferences::init(Box::new(MemoryStore::new(Some(true))), false);
        let app = App::with_clock(provider, preferences, ManualClock::new());

        assert_eq!(app.game.as_ref().unwrap().definition(), "Crow");
        assert_eq!(app.layout.letters().collect::<String>(), "AHS");
        assert!(app.preferences.dark_mode());
    }
}
