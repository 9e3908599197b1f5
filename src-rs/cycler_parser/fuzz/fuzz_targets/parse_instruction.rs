#![no_main]

use cycler_error::AsCyclerError;
use cycler_parser::parse_instruction;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    match parse_instruction(input, None) {
        Ok(instruction) => {
            for quantity in instruction
                .value()
                .into_iter()
                .chain(instruction.duration())
                .chain(instruction.terminations())
                .chain(instruction.period())
            {
                assert_eq!(quantity.span().slice(input), Some(quantity.text()));
            }
        }
        Err(error) => {
            assert!(error.error_offset <= input.len());
            // rendering must not panic on any offset the parser reports
            let _ = error.error_location(input);
        }
    }
});
