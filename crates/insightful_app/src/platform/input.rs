use insightful_core::{parse_hover_delay, Competitor, Msg, SettingsPatch};

pub const HELP: &str = "\
Commands:
  hover <run>          point at a highlighted keyword (run number in brackets)
  leave <run>          move the pointer away
  delay <ms>           set the hover delay
  insights on|off      enable or disable hover insights
  toggle a|b|other     show or hide a competitor on the comparison chart
  help                 show this list
  quit                 exit";

/// Inbound events for the app loop, from the terminal or from timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_ascii_lowercase();
    let arg = words.next();

    let command = match (verb.as_str(), arg) {
        ("hover", Some(run)) => run
            .parse()
            .map(|run| Command::Msg(Msg::HoverStarted { run }))
            .unwrap_or_else(|_| Command::Unknown(line.trim().to_string())),
        ("leave", Some(run)) => run
            .parse()
            .map(|run| Command::Msg(Msg::HoverEnded { run }))
            .unwrap_or_else(|_| Command::Unknown(line.trim().to_string())),
        ("delay", Some(ms)) => Command::Msg(Msg::SettingsChanged(SettingsPatch::hover_delay(
            parse_hover_delay(ms),
        ))),
        ("insights", Some("on")) => {
            Command::Msg(Msg::SettingsChanged(SettingsPatch::insights_enabled(true)))
        }
        ("insights", Some("off")) => {
            Command::Msg(Msg::SettingsChanged(SettingsPatch::insights_enabled(false)))
        }
        ("toggle", Some(name)) => match name.to_ascii_lowercase().as_str() {
            "a" => Command::Msg(Msg::CompetitorToggled(Competitor::A)),
            "b" => Command::Msg(Msg::CompetitorToggled(Competitor::B)),
            "other" | "x" => Command::Msg(Msg::CompetitorToggled(Competitor::Other)),
            _ => Command::Unknown(line.trim().to_string()),
        },
        ("help", _) | ("?", _) => Command::Help,
        ("quit", _) | ("exit", _) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn hover_and_leave_take_run_numbers() {
        assert_eq!(
            parse_command("hover 3"),
            Some(Command::Msg(Msg::HoverStarted { run: 3 }))
        );
        assert_eq!(
            parse_command("LEAVE 3"),
            Some(Command::Msg(Msg::HoverEnded { run: 3 }))
        );
        assert_eq!(
            parse_command("hover three"),
            Some(Command::Unknown("hover three".into()))
        );
    }

    #[test]
    fn delay_uses_panel_parsing() {
        assert_eq!(
            parse_command("delay -5"),
            Some(Command::Msg(Msg::SettingsChanged(SettingsPatch::hover_delay(0))))
        );
    }

    #[test]
    fn toggles_and_switches() {
        assert_eq!(
            parse_command("insights off"),
            Some(Command::Msg(Msg::SettingsChanged(
                SettingsPatch::insights_enabled(false)
            )))
        );
        assert_eq!(
            parse_command("toggle Other"),
            Some(Command::Msg(Msg::CompetitorToggled(Competitor::Other)))
        );
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }
}
