use std::{cell::RefCell, rc::Rc, str::from_utf8};

use pocket_bank::bin_utils::Service;

const TEST_FILE: &str = include_str!("instructions.csv");

#[test]
fn run_instruction_file() {
    let mut output = Vec::new();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let collected = Rc::clone(&errors);
    let service = Service {
        bank_name: "Banco de Quito".to_owned(),
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(move |_line, err| {
            collected.borrow_mut().push(err.to_string());
        }),
    };
    service.run().unwrap();

    // account order follows the instruction file, so the output is stable
    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        vec![
            "person,balance,bank",
            "Jhon Doe,3000,Banco de Quito",
            "Andres,1100.8989,Banco de Quito",
        ]
    );

    let errors = errors.borrow();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "Insufficient funds");
    assert_eq!(errors[1], "No account for `Maria`");
}
