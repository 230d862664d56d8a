//! Menu-driven arithmetic dispatcher for the console.
//!
//! Faithful to the original lesson program: five numbered selections, two
//! float operands, a guarded divide, and a farewell. The dispatcher owns
//! its reader/writer so the whole conversation can run against in-memory
//! buffers in tests.

use crate::errors::CalcError;
use std::io::{BufRead, Write};

/// The user's menu choice, parsed from a raw token. Anything outside
/// `"1"`..`"5"` is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exit,
    Invalid,
}

impl Selection {
    pub fn parse(token: &str) -> Selection {
        match token.trim() {
            "1" => Selection::Add,
            "2" => Selection::Subtract,
            "3" => Selection::Multiply,
            "4" => Selection::Divide,
            "5" => Selection::Exit,
            _ => Selection::Invalid,
        }
    }

    fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Selection::Add | Selection::Subtract | Selection::Multiply | Selection::Divide
        )
    }
}

/// Apply an arithmetic selection to two operands. `Divide` by exactly
/// zero is the one guarded precondition; `Exit`/`Invalid` never reach
/// this far.
pub fn apply(selection: Selection, a: f64, b: f64) -> Result<f64, CalcError> {
    match selection {
        Selection::Add => Ok(a + b),
        Selection::Subtract => Ok(a - b),
        Selection::Multiply => Ok(a * b),
        Selection::Divide => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        other => Err(CalcError::MalformedOperand(format!(
            "{:?} is not an arithmetic selection",
            other
        ))),
    }
}

/// Format a result the way the original printed floats: integral values
/// keep a trailing `.0` (so `-2.0 * 6.0` prints `-12.0`, not `-12`).
pub fn fmt_result(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Which flavor of the program is running. They differ only in the menu's
/// fifth line and the farewell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    SingleShot,
    Looping,
}

impl Variant {
    fn exit_menu_line(&self) -> &'static str {
        match self {
            Variant::SingleShot => "5. If nothing to operate, bye for now",
            Variant::Looping => "5. Exit",
        }
    }

    fn farewell(&self) -> &'static str {
        match self {
            Variant::SingleShot => "Bye for now!",
            Variant::Looping => "Goodbye!",
        }
    }
}

/// The dispatcher: one menu round per [`Dispatcher::run_once`] call.
pub struct Dispatcher<R: BufRead, W: Write> {
    input: R,
    output: W,
    variant: Variant,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    pub fn new(input: R, output: W, variant: Variant) -> Self {
        Dispatcher {
            input,
            output,
            variant,
        }
    }

    /// Read one trimmed line; None on end of input.
    fn read_token(&mut self) -> Result<Option<String>, CalcError> {
        let mut raw = String::new();
        if self.input.read_line(&mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(raw.trim().to_string()))
    }

    fn read_operand(&mut self, prompt: &str) -> Result<f64, CalcError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let token = self
            .read_token()?
            .ok_or_else(|| CalcError::MalformedOperand("end of input".to_string()))?;
        token
            .parse::<f64>()
            .map_err(|_| CalcError::MalformedOperand(token))
    }

    /// Present the menu, read a selection, and dispatch it. Returns
    /// `true` when the session should continue with another round.
    /// Malformed operands are fatal, as in the original; divide-by-zero
    /// is reported and the session carries on.
    pub fn run_once(&mut self) -> Result<bool, CalcError> {
        writeln!(self.output, "\nChoose an operation:")?;
        writeln!(self.output, "1. Addition (+)")?;
        writeln!(self.output, "2. Subtraction (-)")?;
        writeln!(self.output, "3. Multiplication (*)")?;
        writeln!(self.output, "4. Division (/)")?;
        writeln!(self.output, "{}", self.variant.exit_menu_line())?;
        write!(self.output, "Enter your choice (1/2/3/4/5): ")?;
        self.output.flush()?;

        let selection = match self.read_token()? {
            Some(token) => Selection::parse(&token),
            // Out of input; treat like an exit so the loop can't spin.
            None => return Ok(false),
        };

        if selection.is_arithmetic() {
            let a = self.read_operand("Enter the first number: ")?;
            let b = self.read_operand("Enter the second number: ")?;
            match apply(selection, a, b) {
                Ok(result) => writeln!(self.output, "Result: {}", fmt_result(result))?,
                Err(CalcError::DivisionByZero) => {
                    writeln!(self.output, "Error: Cannot divide by zero.")?
                }
                Err(err) => return Err(err),
            }
            Ok(true)
        } else if selection == Selection::Exit {
            writeln!(self.output, "{}", self.variant.farewell())?;
            Ok(false)
        } else {
            writeln!(self.output, "Invalid choice. Please select 1-5.")?;
            Ok(true)
        }
    }

    /// The looping variant's control loop: dispatch until Exit clears the
    /// continuation flag.
    pub fn run_until_exit(&mut self) -> Result<(), CalcError> {
        let mut running = true;
        while running {
            running = self.run_once()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn dispatch(lines: &str, variant: Variant) -> (Result<(), CalcError>, String) {
        let mut out: Vec<u8> = vec![];
        let result = {
            let mut d = Dispatcher::new(Cursor::new(lines.to_string()), &mut out, variant);
            match variant {
                Variant::SingleShot => d.run_once().map(|_| ()),
                Variant::Looping => d.run_until_exit(),
            }
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!(Selection::parse("1"), Selection::Add);
        assert_eq!(Selection::parse(" 4 "), Selection::Divide);
        assert_eq!(Selection::parse("5"), Selection::Exit);
        assert_eq!(Selection::parse("6"), Selection::Invalid);
        assert_eq!(Selection::parse("add"), Selection::Invalid);
        assert_eq!(Selection::parse(""), Selection::Invalid);
    }

    #[test]
    fn test_apply_matches_float_arithmetic() {
        assert_eq!(apply(Selection::Add, 3.0, 4.5).unwrap(), 7.5);
        assert_eq!(apply(Selection::Subtract, 3.0, 4.5).unwrap(), -1.5);
        assert_eq!(apply(Selection::Multiply, -2.0, 6.0).unwrap(), -12.0);
        assert_eq!(apply(Selection::Divide, 10.0, 4.0).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_by_zero_never_computes() {
        match apply(Selection::Divide, 10.0, 0.0) {
            Err(CalcError::DivisionByZero) => {}
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_result_formatting() {
        assert_eq!(fmt_result(7.5), "7.5");
        assert_eq!(fmt_result(-12.0), "-12.0");
        assert_eq!(fmt_result(0.0), "0.0");
        assert_eq!(fmt_result(10.0 / 3.0), "3.3333333333333335");
    }

    #[test]
    fn test_addition_scenario() {
        let (result, out) = dispatch("1\n3.0\n4.5\n", Variant::SingleShot);
        result.unwrap();
        assert!(out.contains("Result: 7.5\n"));
    }

    #[test]
    fn test_multiply_negative_scenario() {
        let (result, out) = dispatch("3\n-2.0\n6.0\n", Variant::SingleShot);
        result.unwrap();
        assert!(out.contains("Result: -12.0\n"));
    }

    #[test]
    fn test_divide_by_zero_scenario() {
        let (result, out) = dispatch("4\n10.0\n0.0\n", Variant::SingleShot);
        result.unwrap();
        assert!(out.contains("Error: Cannot divide by zero.\n"));
        assert!(!out.contains("Result:"));
    }

    #[test]
    fn test_single_shot_farewell() {
        let (result, out) = dispatch("5\n", Variant::SingleShot);
        result.unwrap();
        assert!(out.contains("5. If nothing to operate, bye for now\n"));
        assert!(out.contains("Bye for now!\n"));
    }

    #[test]
    fn test_exit_terminates_loop() {
        let (result, out) = dispatch("2\n10\n4\n5\n", Variant::Looping);
        result.unwrap();
        assert!(out.contains("Result: 6.0\n"));
        assert!(out.contains("Goodbye!\n"));
        // Two menu rounds, no more.
        assert_eq!(out.matches("Choose an operation:").count(), 2);
    }

    #[test]
    fn test_invalid_choice_reprompts_in_loop() {
        let (result, out) = dispatch("9\n5\n", Variant::Looping);
        result.unwrap();
        assert!(out.contains("Invalid choice. Please select 1-5.\n"));
        assert_eq!(out.matches("Choose an operation:").count(), 2);
    }

    #[test]
    fn test_malformed_operand_is_fatal() {
        let (result, out) = dispatch("1\npotato\n", Variant::Looping);
        match result {
            Err(CalcError::MalformedOperand(token)) => assert_eq!(token, "potato"),
            other => panic!("expected MalformedOperand, got {:?}", other),
        }
        assert!(!out.contains("Result:"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (result, out) = dispatch("", Variant::Looping);
        result.unwrap();
        assert_eq!(out.matches("Choose an operation:").count(), 1);
    }
}
