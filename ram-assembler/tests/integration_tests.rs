//! Integration tests for the RAM program loader

use ram_assembler::{assemble, load, AssemblerError};
use ram_spec::{Instruction, Opcode, Operand, Value};

const MULTIPLY: &str = r#"
# multiply the two numbers in R1 and R2
# first line initializes registers:
0 6 3
# program text starts here
1  LOAD #0
2  STORE 3
3  LOAD 1
4  JZERO 11
5  SUB #1
6  STORE 1
7  LOAD 2
8  ADD 3
9  STORE 3
10 GOTO 3
11 LOAD 3
12 END 0
"#;

#[test]
fn test_multiply_program_shape() {
    let program = assemble(MULTIPLY).expect("Assembly failed");

    assert_eq!(
        program.registers,
        vec![Value::from(0), Value::from(6), Value::from(3)]
    );
    assert_eq!(program.len(), 12);
    assert_eq!(program.fetch(4), Some(&Instruction::new("JZERO", "11")));
    assert_eq!(program.fetch(12), Some(&Instruction::new("END", "0")));
    assert_eq!(program.fetch(13), None);
}

#[test]
fn test_every_line_decodes() {
    let program = assemble(MULTIPLY).expect("Assembly failed");
    for (address, inst) in program.lines() {
        let opcode = inst.opcode().unwrap_or_else(|e| panic!("line {}: {}", address, e));
        if opcode != Opcode::End {
            inst.decode_operand()
                .unwrap_or_else(|e| panic!("line {}: {}", address, e));
        }
    }
}

#[test]
fn test_operand_forms_survive_loading() {
    let program = assemble("0\n1 LOAD #-5\n2 LOAD 5\n3 LOAD *5\n").unwrap();
    let operands: Vec<Operand> = program
        .instructions
        .iter()
        .map(|inst| inst.decode_operand().unwrap())
        .collect();
    assert_eq!(
        operands,
        vec![
            Operand::Immediate(Value::from(-5)),
            Operand::Direct(5),
            Operand::Indirect(5),
        ]
    );
}

#[test]
fn test_line_numbers_are_not_interpreted() {
    // NUM is free-form; position defines the address
    let program = assemble("0\n10 LOAD #1\nx END 0\n").unwrap();
    assert_eq!(program.fetch(1), Some(&Instruction::new("LOAD", "#1")));
    assert_eq!(program.fetch(2), Some(&Instruction::new("END", "0")));
}

#[test]
fn test_big_register_values() {
    let program = assemble("0 340282366920938463463374607431768211457\n1 END 0\n").unwrap();
    let expected: Value = "340282366920938463463374607431768211457".parse().unwrap();
    assert_eq!(program.registers[1], expected);
}

#[test]
fn test_windows_line_endings() {
    let program = assemble("0 1\r\n1 LOAD 1\r\n2 END 0\r\n").unwrap();
    assert_eq!(program.fetch(1), Some(&Instruction::new("LOAD", "1")));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("ram-loader-{}.ram", std::process::id()));
    std::fs::write(&path, MULTIPLY).unwrap();

    let program = load(&path).expect("load failed");
    std::fs::remove_file(&path).ok();

    assert_eq!(program, assemble(MULTIPLY).unwrap());
}

#[test]
fn test_load_missing_file() {
    let result = load("/nonexistent/program.ram");
    assert!(matches!(result, Err(AssemblerError::IoError(_))));
}
