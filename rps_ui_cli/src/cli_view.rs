use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use itertools::Itertools;
use strum::IntoEnumIterator;

use rps_core::{
    choice::Choice,
    config::GameConfig,
    error::GameError,
    event::Event,
    player::{Player, PlayerId},
    resolver::{Outcome, RoundResult, Verdict},
    view::View,
};

static RULES: &str = "
*** Rock · Paper · Scissors ***
A party game for 2 to 10 players sharing one screen. Every player picks rock, paper or scissors
in secret while the others look away. After a short countdown all picks are revealed at once.
When exactly two different gestures were picked, everybody who picked the stronger one wins and
everybody else loses. When all players picked the same gesture, or all three gestures show up,
the round is a tie. Press c to see what beats what.";

static CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, PartialEq)]
enum CliAction {
    Quit,
    Rules,
    ChoiceEffects,
    PlayAgain,
    Choice(Choice),
    Count(usize),
}

#[derive(Debug, PartialEq, Eq)]
struct ParseActionError;

impl CliAction {
    fn info(&self) -> String {
        match self {
            CliAction::Quit => "quit".to_string(),
            CliAction::Rules => "display rules".to_string(),
            CliAction::ChoiceEffects => "display what beats what".to_string(),
            CliAction::PlayAgain => "play again".to_string(),
            CliAction::Choice(c) => format!("{} {}", c.icon(), c),
            CliAction::Count(n) => format!("{n} players"),
        }
    }

    fn cmd_str(&self) -> String {
        match self {
            CliAction::Quit => "q".to_string(),
            CliAction::Rules => "h".to_string(),
            CliAction::ChoiceEffects => "c".to_string(),
            CliAction::PlayAgain => "a".to_string(),
            CliAction::Choice(c) => c.to_string()[..1].to_lowercase(),
            CliAction::Count(n) => n.to_string(),
        }
    }
}

impl FromStr for CliAction {
    type Err = ParseActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "q" => Ok(CliAction::Quit),
            "h" => Ok(CliAction::Rules),
            "c" => Ok(CliAction::ChoiceEffects),
            "a" => Ok(CliAction::PlayAgain),
            s => {
                if let Ok(c) = Choice::from_str(s) {
                    Ok(CliAction::Choice(c))
                } else if let Ok(n) = usize::from_str(s) {
                    Ok(CliAction::Count(n))
                } else {
                    Err(ParseActionError)
                }
            }
        }
    }
}

/// Answer to a prompt. `Closed` stands for end of input or a failed read.
#[derive(Debug, PartialEq)]
enum Answer {
    Action(CliAction),
    Empty,
    Closed,
}

pub struct CliView<R: BufRead> {
    input: R,
    fixed_players: Option<usize>,
    printed_events: usize,
    io_error: Option<io::Error>,
}

impl<R: BufRead> CliView<R> {
    pub fn new(input: R, fixed_players: Option<usize>) -> Self {
        CliView {
            input,
            fixed_players,
            printed_events: 0,
            io_error: None,
        }
    }

    /// The read error that ended the game, if any.
    pub fn into_io_error(self) -> Option<io::Error> {
        self.io_error
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }

    fn query_user(&mut self, cmds: &[CliAction], prompt: &str) -> io::Result<Answer> {
        print!("\n{}\n", prompt);
        loop {
            for cmd in cmds {
                println!("- [{}]: {}", cmd.cmd_str(), cmd.info());
            }
            let Some(line) = self.read_line()? else {
                return Ok(Answer::Closed);
            };
            if line.trim().is_empty() {
                return Ok(Answer::Empty);
            }
            match CliAction::from_str(&line) {
                Ok(action) => return Ok(Answer::Action(action)),
                Err(ParseActionError) => println!("Unknown command: {}", line.trim()),
            }
        }
    }

    /// Like `query_user`, but a failed read is kept for `into_io_error` and
    /// ends the game like closed input.
    fn ask(&mut self, cmds: &[CliAction], prompt: &str) -> Answer {
        match self.query_user(cmds, prompt) {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("failed to read input: {e}");
                self.io_error = Some(e);
                Answer::Closed
            }
        }
    }
}

fn format_event(event: &Event, players: &[Player]) -> String {
    let name = |id: &PlayerId| {
        players
            .iter()
            .find(|p| p.id == *id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Player {id}"))
    };
    match event {
        Event::Seated(count) => format!("~ Seated: {count} players joined the table"),
        Event::ChoiceLocked(pl, Some(c)) => format!("~ Chosen: {} picked {}", name(pl), c),
        Event::ChoiceLocked(pl, None) => format!("~ Chosen: {} picked ❓", name(pl)),
        Event::CountdownTick(n) => format!("~ Countdown: {n}"),
        Event::Revealed(results) => format!(
            "~ Revealed: {}",
            results
                .iter()
                .map(|r| format!("{} {}", r.name, r.choice.icon()))
                .join(", ")
        ),
        Event::Winner(ids) if ids.is_empty() => "~ Winner: nobody".to_string(),
        Event::Winner(ids) => format!("~ Winner: {}", ids.iter().map(name).join(", ")),
    }
}

fn format_verdict(verdict: &Verdict, results: &[RoundResult]) -> String {
    let name = |id: &PlayerId| {
        results
            .iter()
            .find(|r| r.player_id == *id)
            .map(|r| r.name.clone())
            .unwrap_or_default()
    };
    match verdict {
        Verdict::Tie => "It's a tie! Play another round.".to_string(),
        Verdict::Winner(id) => format!("Winner: {}", name(id)),
        Verdict::SharedWin(ids) => format!("Shared win: {}", ids.iter().map(name).join(", ")),
    }
}

fn format_result(result: &RoundResult) -> String {
    let label = match result.outcome {
        Outcome::Win => "WIN",
        Outcome::Lose => "lose",
        Outcome::Tie => "tie",
    };
    format!(
        "Player {:>2} | {:<16} | {} {:<8} | {}",
        result.player_id,
        result.name,
        result.choice.icon(),
        result.choice,
        label
    )
}

impl<R: BufRead> View for CliView<R> {
    fn obtain_player_count(&mut self, config: &GameConfig) -> Option<usize> {
        print!("{}", CLEAR_SCREEN);
        if let Some(count) = self.fixed_players {
            return Some(count);
        }
        let cmds = vec![CliAction::Quit, CliAction::Rules, CliAction::ChoiceEffects];
        let prompt = format!(
            "How many players? Enter {} to {} (empty for {}):",
            config.min_players, config.max_players, config.default_players
        );
        loop {
            match self.ask(&cmds, &prompt) {
                Answer::Closed | Answer::Action(CliAction::Quit) => return None,
                Answer::Empty => return Some(config.default_players),
                Answer::Action(CliAction::Rules) => println!("{}", RULES),
                Answer::Action(CliAction::ChoiceEffects) => println!("{}", Choice::rules()),
                Answer::Action(CliAction::Count(n)) => return Some(n),
                Answer::Action(_) => println!("Please enter a number of players."),
            }
        }
    }

    fn obtain_choice(&mut self, player: &Player, players: &[Player]) -> Option<Choice> {
        println!("================================================");
        println!(
            "{} of {}: {}, it's your turn. Everybody else, look away!",
            player.id,
            players.len(),
            player.name
        );
        let mut cmds = vec![CliAction::Quit, CliAction::Rules, CliAction::ChoiceEffects];
        cmds.extend(Choice::iter().map(CliAction::Choice));
        loop {
            match self.ask(&cmds, "Pick your gesture:") {
                Answer::Closed | Answer::Action(CliAction::Quit) => return None,
                Answer::Action(CliAction::Rules) => println!("{}", RULES),
                Answer::Action(CliAction::ChoiceEffects) => println!("{}", Choice::rules()),
                Answer::Action(CliAction::Choice(c)) => {
                    print!("{}", CLEAR_SCREEN);
                    println!("❓ {} has chosen.", player.name);
                    return Some(c);
                }
                Answer::Empty | Answer::Action(_) => {}
            }
        }
    }

    fn notify(&mut self, game_log: &[Event], players: &[Player]) {
        if game_log.len() < self.printed_events {
            self.printed_events = 0;
        }
        for event in &game_log[self.printed_events..] {
            println!("{}", format_event(event, players));
        }
        self.printed_events = game_log.len();
    }

    fn show_countdown(&mut self, remaining: u8) {
        print!("{}", CLEAR_SCREEN);
        println!("\n\n\t\t{remaining}\n\n");
    }

    fn show_results(&mut self, results: &[RoundResult], verdict: &Verdict) {
        println!("================================================");
        println!("{}", format_verdict(verdict, results));
        println!("------------------------------------------------");
        for result in results {
            println!("{}", format_result(result));
        }
    }

    fn show_error(&mut self, error: &GameError) {
        println!("{error}");
    }

    fn obtain_play_again(&mut self) -> bool {
        self.printed_events = 0;
        let cmds = vec![CliAction::PlayAgain, CliAction::Quit];
        loop {
            match self.ask(&cmds, "Another round?") {
                Answer::Action(CliAction::PlayAgain) => return true,
                Answer::Closed | Answer::Action(CliAction::Quit) => return false,
                Answer::Empty | Answer::Action(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, BufReader, Cursor, Read},
        str::FromStr,
    };

    use rps_core::{
        choice::Choice,
        config::GameConfig,
        event::Event,
        player::Player,
        resolver::{Outcome, RoundResult, Verdict},
        view::View,
    };

    use crate::cli_view::{format_event, format_verdict, CliAction, CliView, ParseActionError};

    fn view(input: &str) -> CliView<Cursor<Vec<u8>>> {
        CliView::new(Cursor::new(input.as_bytes().to_vec()), None)
    }

    #[test]
    fn from_str_should_parse_commands_choices_and_counts() {
        assert_eq!(CliAction::from_str("q"), Ok(CliAction::Quit));
        assert_eq!(CliAction::from_str("h"), Ok(CliAction::Rules));
        assert_eq!(CliAction::from_str("c"), Ok(CliAction::ChoiceEffects));
        assert_eq!(CliAction::from_str(" a "), Ok(CliAction::PlayAgain));
        assert_eq!(CliAction::from_str("r"), Ok(CliAction::Choice(Choice::Rock)));
        assert_eq!(
            CliAction::from_str("Scissors"),
            Ok(CliAction::Choice(Choice::Scissors))
        );
        assert_eq!(CliAction::from_str("4"), Ok(CliAction::Count(4)));
        assert_eq!(CliAction::from_str("lizard"), Err(ParseActionError));
    }

    #[test]
    fn cmd_str_should_round_trip_through_from_str() {
        for action in [
            CliAction::Quit,
            CliAction::Rules,
            CliAction::ChoiceEffects,
            CliAction::PlayAgain,
            CliAction::Choice(Choice::Paper),
            CliAction::Count(7),
        ] {
            assert_eq!(CliAction::from_str(&action.cmd_str()), Ok(action));
        }
    }

    #[test]
    fn obtain_player_count_should_quit_when_input_is_closed() {
        let mut view = view("");

        assert_eq!(view.obtain_player_count(&GameConfig::default()), None);
        assert!(view.into_io_error().is_none());
    }

    #[test]
    fn obtain_player_count_should_use_the_default_for_an_empty_line() {
        let mut view = view("\n");

        assert_eq!(view.obtain_player_count(&GameConfig::default()), Some(2));
    }

    #[test]
    fn obtain_player_count_should_skip_help_and_unknown_input() {
        let mut view = view("h\nlizard\n5\n");

        assert_eq!(view.obtain_player_count(&GameConfig::default()), Some(5));
    }

    #[test]
    fn obtain_player_count_should_quit_and_keep_the_error_when_reading_fails() {
        let mut view = CliView::new(BufReader::new(BrokenInput), None);

        assert_eq!(view.obtain_player_count(&GameConfig::default()), None);
        let error = view.into_io_error().expect("read error should be kept");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn obtain_player_count_should_not_read_with_a_fixed_count() {
        let mut view = CliView::new(Cursor::new(Vec::new()), Some(4));

        assert_eq!(view.obtain_player_count(&GameConfig::default()), Some(4));
    }

    #[test]
    fn obtain_choice_should_ignore_empty_lines() {
        let mut view = view("\n\np\n");
        let players = vec![Player::with_default_name(1), Player::with_default_name(2)];

        assert_eq!(
            view.obtain_choice(&players[0], &players),
            Some(Choice::Paper)
        );
    }

    #[test]
    fn obtain_choice_should_quit_when_input_is_closed() {
        let mut view = view("\n");
        let players = vec![Player::with_default_name(1)];

        assert_eq!(view.obtain_choice(&players[0], &players), None);
    }

    #[test]
    fn obtain_play_again_should_stop_when_input_is_closed() {
        assert!(view("a\n").obtain_play_again());
        assert!(!view("").obtain_play_again());
        assert!(!view("\nq\n").obtain_play_again());
    }

    #[test]
    fn format_event_should_hide_redacted_choices() {
        let players = vec![Player::new(1, "Ferris".to_string())];

        assert_eq!(
            format_event(&Event::ChoiceLocked(1, None), &players),
            "~ Chosen: Ferris picked ❓"
        );
        assert_eq!(
            format_event(&Event::ChoiceLocked(1, Some(Choice::Rock)), &players),
            "~ Chosen: Ferris picked Rock"
        );
    }

    #[test]
    fn format_verdict_should_name_the_winners() {
        let results = vec![
            RoundResult {
                player_id: 1,
                name: "Ferris".to_string(),
                choice: Choice::Paper,
                outcome: Outcome::Win,
            },
            RoundResult {
                player_id: 2,
                name: "Corro".to_string(),
                choice: Choice::Paper,
                outcome: Outcome::Win,
            },
        ];

        assert_eq!(
            format_verdict(&Verdict::SharedWin(vec![1, 2]), &results),
            "Shared win: Ferris, Corro"
        );
        assert_eq!(format_verdict(&Verdict::Winner(2), &results), "Winner: Corro");
        assert_eq!(
            format_verdict(&Verdict::Tie, &results),
            "It's a tie! Play another round."
        );
    }

    // Infra ----------------------------------------------------------------

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
        }
    }
}
