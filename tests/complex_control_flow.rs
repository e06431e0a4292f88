use basic_compiler::{compile, Emitter, Lexer, Parser};

#[test]
fn test_nested_if_in_while() {
    let source = r#"
LET n = 0
WHILE n < 10 REPEAT
    IF n > 5 THEN
        PRINT n
    ENDIF
    LET n = n + 1
ENDWHILE
"#;
    insta::assert_snapshot!(compile(source).unwrap(), @r#"
#include <stdio.h>
int main(void){
float n;
n = 0;
while(n<10){
if(n>5){
printf("%.2f\n", (float)(n));
}
n = n+1;
}
return 0;
}
"#);
}

#[test]
fn test_deeply_nested_blocks_close_in_order() {
    let source = r#"
LET a = 1
IF a == 1 THEN
    WHILE a < 3 REPEAT
        IF a == 2 THEN
            WHILE a < 3 REPEAT
                LET a = a + 1
            ENDWHILE
        ENDIF
        LET a = a + 1
    ENDWHILE
ENDIF
"#;
    let output = compile(source).unwrap();
    let opens = output.matches("){").count();
    let closes = output.lines().filter(|line| *line == "}").count();
    // One extra closing brace ends main.
    assert_eq!(opens, 4);
    assert_eq!(closes, opens + 1);
    assert!(output.contains("a = a+1;\n}\n}\na = a+1;\n}\n}\n"));
}

#[test]
fn test_goto_into_and_out_of_loops() {
    let source = r#"
LET i = 0
LABEL again
WHILE i < 100 REPEAT
    LET i = i + 1
    IF i == 50 THEN
        GOTO halfway
    ENDIF
ENDWHILE
LABEL halfway
PRINT i
IF i < 100 THEN
    GOTO again
ENDIF
"#;
    let output = compile(source).unwrap();
    assert!(output.contains("again:\nwhile(i<100){\n"));
    assert!(output.contains("if(i==50){\ngoto halfway;\n}\n"));
    assert!(output.contains("halfway:\n"));
    assert!(output.contains("goto again;\n"));
}

#[test]
fn test_variable_declared_inside_block_stays_declared() {
    let source = "IF 1 == 1 THEN\nLET inner = 2\nENDIF\nPRINT inner\n";
    let output = compile(source).unwrap();
    assert!(output.contains("float inner;\n"));
    assert!(output.contains("printf(\"%.2f\\n\", (float)(inner));"));
}

#[test]
fn test_label_sets_are_tracked() {
    let source = "GOTO b\nLABEL a\nGOTO a\nLABEL b\nGOTO b\n";
    let mut emitter = Emitter::new();
    let mut parser = Parser::new(Lexer::new(source), &mut emitter).unwrap();
    parser.compile_program().unwrap();

    let declared: Vec<&str> = parser.labels_declared().iter().map(String::as_str).collect();
    let gotoed: Vec<&str> = parser.labels_gotoed().collect();
    assert_eq!(declared, vec!["a", "b"]);
    assert_eq!(gotoed, vec!["b", "a"]);
}
