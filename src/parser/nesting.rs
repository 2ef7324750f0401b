//! Nesting limit checked on the token stream before the grammar runs.
//!
//! The grammar descends once per nested expression or pattern, so deeply
//! nested input is rejected up front instead of exhausting the parser stack.
//! Nesting is measured without parsing: every open delimiter is one level, and
//! so is every keyword form whose body runs on to the end of the enclosing
//! context (`let ... in Body`, `fun (...) -> Body`, ...). A form stays open
//! until a separator, a closing delimiter or one of its own keywords closes
//! it. The measure may overcount but never undercounts well-formed input.

use crate::{Span, SyntaxKind};

/// Deepest nesting the parser accepts.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// An open delimiter. `fun_name` marks `( 'f'/N -| [...] )`.
    Delimiter { fun_name: bool },
    /// A keyword form still extending to the right.
    Form(SyntaxKind),
    /// `V = P`, an alias pattern or a `let` binding.
    Alias,
}

/// Pop open forms of the innermost delimiter until `stop` matches one.
///
/// The matching form is kept unless `inclusive` is set. With no match every
/// form up to the delimiter is popped.
fn close_forms(scopes: &mut Vec<Scope>, stop: impl Fn(SyntaxKind) -> bool, inclusive: bool) {
    while let Some(scope) = scopes.last().copied() {
        match scope {
            Scope::Delimiter { .. } => return,
            Scope::Form(kind) if stop(kind) => {
                if inclusive {
                    scopes.pop();
                }
                return;
            }
            Scope::Form(_) | Scope::Alias => {
                scopes.pop();
            }
        }
    }
}

/// Close the innermost delimiter, reporting whether it wrapped a function
/// name.
fn close_delimiter(scopes: &mut Vec<Scope>) -> bool {
    close_forms(scopes, |_| false, false);
    matches!(scopes.pop(), Some(Scope::Delimiter { fun_name: true }))
}

fn starts_annotated_fun_name(rest: &[(SyntaxKind, Span)]) -> bool {
    matches!(
        rest,
        [
            (SyntaxKind::T_ATOM, _),
            (SyntaxKind::T_SLASH, _),
            (SyntaxKind::T_INT, _),
            (SyntaxKind::T_ANNOTATE, _),
            ..
        ]
    )
}

/// Span of the first token nested deeper than [`MAX_DEPTH`], if any.
pub(crate) fn first_too_deep(tokens: &[(SyntaxKind, Span)]) -> Option<Span> {
    use SyntaxKind as K;

    let mut scopes: Vec<Scope> = Vec::new();
    let mut last: Option<K> = None;
    let mut before_last: Option<K> = None;
    let mut closed_fun_name = false;
    for (index, (kind, span)) in tokens.iter().enumerate() {
        let mut just_closed_fun_name = false;
        match kind {
            K::T_LPAREN => {
                let rest = tokens.get(index + 1..).unwrap_or_default();
                scopes.push(Scope::Delimiter {
                    fun_name: starts_annotated_fun_name(rest),
                });
            }
            K::T_LBRACKET | K::T_LBRACE | K::T_LT | K::T_MAP_OPEN => {
                scopes.push(Scope::Delimiter { fun_name: false });
            }
            K::T_RPAREN | K::T_RBRACKET | K::T_RBRACE | K::T_GT | K::T_MAP_CLOSE => {
                just_closed_fun_name = close_delimiter(&mut scopes);
            }
            K::T_COMMA | K::T_PIPE | K::T_FAT_ARROW | K::T_COLON_EQ => {
                close_forms(&mut scopes, |_| false, false);
            }
            K::K_LET
            | K::K_LETREC
            | K::K_CASE
            | K::K_FUN
            | K::K_TRY
            | K::K_RECEIVE
            | K::K_DO
            | K::K_CATCH
            | K::K_APPLY
            | K::K_CALL
            | K::K_PRIMOP => scopes.push(Scope::Form(*kind)),
            K::K_IN => close_forms(&mut scopes, |k| matches!(k, K::K_LET | K::K_LETREC), false),
            K::K_OF => close_forms(&mut scopes, |k| matches!(k, K::K_CASE | K::K_TRY), false),
            K::K_END => close_forms(&mut scopes, |k| k == K::K_CASE, true),
            K::K_AFTER => close_forms(&mut scopes, |k| k == K::K_RECEIVE, false),
            K::K_WHEN | K::T_ARROW => close_forms(
                &mut scopes,
                |k| matches!(k, K::K_CASE | K::K_RECEIVE | K::K_TRY | K::K_FUN),
                false,
            ),
            K::T_EQ => {
                let fun_name_head = (last == Some(K::T_INT) && before_last == Some(K::T_SLASH))
                    || (last == Some(K::T_RPAREN) && closed_fun_name);
                if fun_name_head {
                    // A new function definition ends the previous sibling.
                    close_forms(&mut scopes, |k| k == K::K_LETREC, false);
                } else if matches!(last, Some(K::T_VAR | K::T_RPAREN)) {
                    scopes.push(Scope::Alias);
                }
            }
            _ => {}
        }
        if scopes.len() > MAX_DEPTH {
            return Some(span.clone());
        }
        closed_fun_name = just_closed_fun_name;
        before_last = last;
        last = Some(*kind);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize_without_trivia;
    use rstest::rstest;

    fn depth_error(src: &str) -> Option<Span> {
        first_too_deep(&tokenize_without_trivia(src))
    }

    fn let_chain(depth: usize) -> String {
        let mut src = String::new();
        for i in 0..depth {
            src.push_str(&format!("let <X{i}> = call 'erlang':'+' (X, {i}) in "));
        }
        src.push('X');
        src
    }

    #[rstest]
    #[case(1)]
    #[case(MAX_DEPTH / 2)]
    #[case(MAX_DEPTH - 3)]
    fn accepts_let_chains_below_the_limit(#[case] depth: usize) {
        assert_eq!(depth_error(&let_chain(depth)), None);
    }

    #[rstest]
    fn rejects_let_chain_past_the_limit() {
        assert!(depth_error(&let_chain(MAX_DEPTH + 1)).is_some());
    }

    #[rstest]
    fn reports_the_first_token_past_the_limit() {
        let src = format!("{}1{}", "{".repeat(MAX_DEPTH + 1), "}".repeat(MAX_DEPTH + 1));
        assert_eq!(depth_error(&src), Some(MAX_DEPTH..MAX_DEPTH + 1));
    }

    #[rstest]
    fn siblings_do_not_accumulate() {
        let element = "case X of <'a'> when 'true' -> let <Y> = X in Y <_> when 'true' -> 'b' end";
        let tuple = format!("{{{}}}", vec![element; 2 * MAX_DEPTH].join(", "));
        assert_eq!(depth_error(&tuple), None);
    }

    #[rstest]
    fn function_definitions_do_not_accumulate() {
        let mut src = String::from("module 'm' [] attributes []\n");
        for i in 0..2 * MAX_DEPTH {
            src.push_str(&format!(
                "'f{i}'/1 = fun (X) -> let <Y> = apply 'g'/1 (X) in catch Y\n"
            ));
            src.push_str(&format!(
                "('h{i}'/0 -| ['compiler_generated']) = fun () -> do 'a' 'b'\n"
            ));
        }
        src.push_str("end");
        assert_eq!(depth_error(&src), None);
    }

    #[rstest]
    fn letrec_definitions_do_not_accumulate() {
        let defs: Vec<String> = (0..2 * MAX_DEPTH)
            .map(|i| format!("'l{i}'/1 = fun (X) -> let <Y> = X in Y"))
            .collect();
        let src = format!("letrec {} in 'ok'", defs.join(" "));
        assert_eq!(depth_error(&src), None);
    }
}
