extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use basic_val::{convert, val, Error, Val};
use linefeed::{Interface, ReadResult, Signal, Terminal};

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> std::io::Result<()> {
    let command = Interface::new("VAL")?;
    prepare(&command)?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match convert(&string) {
            Ok(value) => print_value(&command, value)?,
            Err(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error_text(&error))
                ))?;
                print_value(&command, val(&string))?;
            }
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

fn prepare<T: Terminal>(command: &Interface<T>) -> std::io::Result<()> {
    command.set_prompt("VAL> ")?;
    command.set_report_signal(Signal::Interrupt, true);
    Ok(())
}

fn error_text(error: &Error) -> String {
    format!("?{}", error)
}

fn print_value<T: Terminal>(command: &Interface<T>, value: Val) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}  {}\n",
        value,
        Style::new().dimmed().paint(value.type_name())
    ))
}
