use basic_compiler::compile;

fn compile_source(source: &str) -> String {
    compile(source).unwrap()
}

#[test]
fn test_simple_if_statement() {
    let source = "IF 1 == 1 THEN\nPRINT \"hi\"\nENDIF\n";
    insta::assert_snapshot!(compile_source(source), @r#"
#include <stdio.h>
int main(void){
if(1==1){
printf("hi\n");
}
return 0;
}
"#);
}

#[test]
fn test_while_loop() {
    let source = r#"
LET i = 0
WHILE i < 3 REPEAT
    PRINT i
    LET i = i + 1
ENDWHILE
"#;
    insta::assert_snapshot!(compile_source(source), @r#"
#include <stdio.h>
int main(void){
float i;
i = 0;
while(i<3){
printf("%.2f\n", (float)(i));
i = i+1;
}
return 0;
}
"#);
}

#[test]
fn test_comparison_operators() {
    let source = r#"
LET x = 5
IF x == 5 THEN
ENDIF
IF x != 5 THEN
ENDIF
IF x < 5 THEN
ENDIF
IF x <= 5 THEN
ENDIF
IF x > 5 THEN
ENDIF
IF x >= 5 THEN
ENDIF
"#;
    let output = compile_source(source);
    for op in ["==", "!=", "<", "<=", ">", ">="] {
        assert!(
            output.contains(&format!("if(x{op}5){{\n}}\n")),
            "missing comparison {op} in:\n{output}"
        );
    }
}

#[test]
fn test_empty_blocks() {
    let output = compile_source("IF 1 < 2 THEN\nENDIF\nWHILE 1 > 2 REPEAT\nENDWHILE\n");
    assert!(output.contains("if(1<2){\n}\nwhile(1>2){\n}\n"));
}

#[test]
fn test_label_and_backward_goto() {
    let source = "LABEL top\nPRINT \"loop\"\nGOTO top\n";
    insta::assert_snapshot!(compile_source(source), @r#"
#include <stdio.h>
int main(void){
top:
printf("loop\n");
goto top;
return 0;
}
"#);
}

#[test]
fn test_forward_goto() {
    let source = "GOTO end\nPRINT \"skipped\"\nLABEL end\n";
    let output = compile_source(source);
    assert!(output.contains("goto end;\nprintf(\"skipped\\n\");\nend:\n"));
}

#[test]
fn test_goto_same_label_many_times() {
    let source = "LABEL a\nGOTO a\nGOTO a\nGOTO a\n";
    let output = compile_source(source);
    assert_eq!(output.matches("goto a;").count(), 3);
    assert_eq!(output.matches("a:").count(), 1);
}

#[test]
fn test_if_block_without_trailing_newline_in_source() {
    let output = compile_source("IF 2 > 1 THEN\nPRINT 2\nENDIF");
    assert!(output.contains("if(2>1){\nprintf(\"%.2f\\n\", (float)(2));\n}\n"));
}
