use basic_compiler::compile;

/// Compiles `LET r = <expr>` and returns the emitted assignment line.
fn assignment(expr: &str) -> String {
    let output = compile(&format!("LET r = {expr}\n")).unwrap();
    output
        .lines()
        .find(|line| line.starts_with("r = "))
        .unwrap()
        .to_string()
}

#[test]
fn test_operators_emitted_in_source_order() {
    // The C compiler applies the same precedence, so the text is copied as is.
    assert_eq!(assignment("1 + 2 * 3"), "r = 1+2*3;");
    assert_eq!(assignment("10 - 5 + 3"), "r = 10-5+3;");
    assert_eq!(assignment("2 * 3 * 4"), "r = 2*3*4;");
}

#[test]
fn test_division_is_floating_point() {
    assert_eq!(assignment("10 - 6 / 2"), "r = 10-6/(float)2;");
    assert_eq!(assignment("20 / 4 * 2"), "r = 20/(float)4*2;");
    assert_eq!(assignment("1 / 2 / 4"), "r = 1/(float)2/(float)4;");

    let output = compile("PRINT 7 / 2\n").unwrap();
    assert!(output.contains("printf(\"%.2f\\n\", (float)(7/(float)2));\n"));
}

#[test]
fn test_signed_operands_are_grouped() {
    assert_eq!(assignment("-1"), "r = (-1);");
    assert_eq!(assignment("+1"), "r = (+1);");
    assert_eq!(assignment("2 * -3"), "r = 2*(-3);");
    assert_eq!(assignment("6 / -3"), "r = 6/(float)(-3);");
    assert_eq!(
        assignment("-1 + 2 * 3 / +4 - 5"),
        "r = (-1)+2*3/(float)(+4)-5;"
    );
}

#[test]
fn test_sign_after_additive_operator_never_forms_increment_or_decrement() {
    let minus = assignment("4 - -4");
    assert_eq!(minus, "r = 4-(-4);");
    assert!(!minus.contains("--"));

    let output = compile("LET b = 1\nLET a = b + +1\n").unwrap();
    assert!(output.contains("a = b+(+1);\n"));
    assert!(!output.contains("++"));
}

#[test]
fn test_number_literals_are_not_normalized() {
    // Copied as written. A leading zero therefore reads as octal in C.
    assert_eq!(assignment("007"), "r = 007;");
    assert_eq!(assignment("3.140"), "r = 3.140;");
    assert_eq!(assignment("0.5 * 2.25"), "r = 0.5*2.25;");
}

#[test]
fn test_expression_with_variables() {
    let output = compile("LET a = 2\nLET b = a * a - a / 2\nPRINT b * -a\n").unwrap();
    assert!(output.contains("b = a*a-a/(float)2;\n"));
    assert!(output.contains("printf(\"%.2f\\n\", (float)(b*(-a)));\n"));
}

#[test]
fn test_comparison_binds_loosest() {
    let output = compile("IF 1 + 2 * 3 >= 4 - 5 THEN\nENDIF\n").unwrap();
    assert!(output.contains("if(1+2*3>=4-5){\n"));
}

#[test]
fn test_chained_comparisons() {
    let output = compile("WHILE 1 < 2 < 3 != 0 REPEAT\nENDWHILE\n").unwrap();
    assert!(output.contains("while(1<2<3!=0){\n"));
}
