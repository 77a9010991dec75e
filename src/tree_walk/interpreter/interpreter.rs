use std::io::Write;

use tracing::debug;

use super::error::{Result, RuntimeError};
use super::scope::Scope;
use crate::easel::{Builtin, Callable, Value};
use crate::tree_walk::parser::{Access, BinOp, Node};

/// Statement outcome: either fall through to the next statement or carry a
/// `finished` value up to the nearest call frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal,
    Return(Value),
}

/// Tree-walking evaluator. Owns the output stream `ink` writes to, so tests
/// can capture program output instead of watching stdout.
pub struct Interpreter<'a> {
    output: Box<dyn Write + 'a>,
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Interpreter<'a> {
    pub fn new() -> Self {
        Self {
            output: Box::new(std::io::stdout()),
        }
    }

    pub fn new_with_output(output: Box<dyn Write + 'a>) -> Self {
        Self { output }
    }

    pub fn print_line(&mut self, line: &str) {
        // program output is best-effort; a closed pipe should not become
        // a language-level error
        let _ = writeln!(self.output, "{line}");
    }

    /// Runs a whole program against `scope`. A `finished` escaping to the
    /// top level has no call frame to deliver to and fails.
    pub fn run(&mut self, program: &[Node], scope: &Scope) -> Result<()> {
        debug!(statements = program.len(), "interpreting program");
        for node in program {
            if let Flow::Return(_) = self.execute(node, scope)? {
                return Err(RuntimeError::ReturnOutsideFunction);
            }
        }
        Ok(())
    }

    /// Runs a statement block, stopping early when a `finished` fires.
    pub fn run_block(&mut self, block: &[Node], scope: &Scope) -> Result<Flow> {
        for node in block {
            if let Flow::Return(value) = self.execute(node, scope)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    pub fn execute(&mut self, node: &Node, scope: &Scope) -> Result<Flow> {
        match node {
            Node::Variable {
                name,
                initializer: Some(initializer),
            } => {
                let value = self.evaluate(initializer, scope)?;
                scope.put(name, value);
                Ok(Flow::Normal)
            }
            Node::Set {
                target,
                property,
                value,
            } => {
                let bound = scope.get(target).ok_or_else(|| RuntimeError::NotInScope {
                    name: target.clone(),
                })?;
                let Value::Record(mut fields) = bound else {
                    return Err(RuntimeError::SetTargetNotRecord {
                        name: target.clone(),
                        found: bound.type_name().to_string(),
                    });
                };
                let value = self.evaluate(value, scope)?;
                fields.insert(property.clone(), value);
                scope.put(target, Value::Record(fields));
                Ok(Flow::Normal)
            }
            Node::FunctionStatement { name, params, body } => {
                scope.put(
                    name,
                    Value::Function {
                        name: name.clone(),
                        params: params.clone(),
                        body: body.clone(),
                        // alias, not copy: a sketch defined before its
                        // callees must still see them at call time
                        closure: scope.clone(),
                    },
                );
                Ok(Flow::Normal)
            }
            Node::StructStatement { name, members } => {
                scope.put(
                    name,
                    Value::StructDef {
                        name: name.clone(),
                        members: members.clone(),
                    },
                );
                Ok(Flow::Normal)
            }
            Node::ReturnStatement { value } => {
                let value = self.evaluate(value, scope)?;
                Ok(Flow::Return(value))
            }
            Node::ForStatement {
                variable,
                start,
                end,
                body,
            } => self.execute_for(variable, start, end, body, scope),
            Node::WhileStatement { condition, body } => {
                while bool::from(&self.evaluate(condition, scope)?) {
                    if let Flow::Return(value) = self.run_block(body, scope)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            }
            Node::ConditionalStatement {
                condition,
                body,
                otherwise,
            } => {
                if bool::from(&self.evaluate(condition, scope)?) {
                    self.run_block(body, scope)
                } else {
                    self.run_block(otherwise, scope)
                }
            }
            expression @ (Node::Literal(_)
            | Node::ArrayLiteral(_)
            | Node::Variable {
                initializer: None, ..
            }
            | Node::Get { .. }
            | Node::Call { .. }
            | Node::BinaryExpr { .. }
            | Node::Instance { .. }) => {
                self.evaluate(expression, scope)?;
                Ok(Flow::Normal)
            }
        }
    }

    // the loop test must be `!(current < end)`, not `current >= end`: with
    // a NaN bound both orderings are false and the loop has to exit
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn execute_for(
        &mut self,
        variable: &str,
        start: &Node,
        end: &Node,
        body: &[Node],
        scope: &Scope,
    ) -> Result<Flow> {
        let start = self.loop_bound(start, scope)?;
        let local = scope.duplicate();
        local.put(variable, Value::Number(start));
        loop {
            // the end bound sees the loop-local bindings, so a body that
            // moves it changes the iteration count
            let end = self.loop_bound(end, &local)?;
            let current = match local.get(variable) {
                Some(Value::Number(n)) => n,
                Some(other) => {
                    return Err(RuntimeError::InvalidLoopBound {
                        found: other.type_name().to_string(),
                    })
                }
                None => {
                    return Err(RuntimeError::NotInScope {
                        name: variable.to_string(),
                    })
                }
            };
            if !(current < end) {
                return Ok(Flow::Normal);
            }
            if let Flow::Return(value) = self.run_block(body, &local)? {
                return Ok(Flow::Return(value));
            }
            local.put(variable, Value::Number(current + 1.0));
        }
    }

    fn loop_bound(&mut self, bound: &Node, scope: &Scope) -> Result<f64> {
        match self.evaluate(bound, scope)? {
            Value::Number(n) => Ok(n),
            other => Err(RuntimeError::InvalidLoopBound {
                found: other.type_name().to_string(),
            }),
        }
    }

    pub fn evaluate(&mut self, node: &Node, scope: &Scope) -> Result<Value> {
        match node {
            Node::Literal(literal) => Ok(Value::from(literal)),
            Node::ArrayLiteral(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.evaluate(item, scope)?);
                }
                Ok(Value::Array(values))
            }
            Node::Variable {
                name,
                initializer: None,
            } => scope
                .get(name)
                .ok_or_else(|| RuntimeError::NotInScope { name: name.clone() }),
            Node::Get { object, property } => {
                let object = self.evaluate(object, scope)?;
                match property {
                    Access::Dotted(name) => self.get_property(object, name),
                    Access::Indexed(index) => {
                        let index = self.evaluate(index, scope)?;
                        get_index(object, index)
                    }
                }
            }
            Node::Call { callee, args } => {
                let callee = self.evaluate(callee, scope)?;
                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    arguments.push(self.evaluate(arg, scope)?);
                }
                callee.call(self, arguments)
            }
            Node::BinaryExpr {
                left,
                operator,
                right,
            } => {
                // both sides always evaluate; && and || do not short-circuit
                let left = self.evaluate(left, scope)?;
                let right = self.evaluate(right, scope)?;
                apply_binary(*operator, left, right)
            }
            Node::Instance { name, members } => {
                let constructor = scope.get(name).ok_or_else(|| RuntimeError::NotInScope {
                    name: name.clone(),
                })?;
                let Value::StructDef {
                    name: struct_name,
                    members: declared,
                } = constructor
                else {
                    return Err(RuntimeError::NotAStruct { name: name.clone() });
                };
                let mut fields = std::collections::BTreeMap::new();
                for (member, expression) in members {
                    if !declared.contains(member) {
                        return Err(RuntimeError::InvalidMember {
                            member: member.clone(),
                            name: struct_name,
                        });
                    }
                    let value = self.evaluate(expression, scope)?;
                    fields.insert(member.clone(), value);
                }
                Ok(Value::Record(fields))
            }
            statement @ (Node::Variable {
                initializer: Some(_),
                ..
            }
            | Node::Set { .. }
            | Node::FunctionStatement { .. }
            | Node::ReturnStatement { .. }
            | Node::ForStatement { .. }
            | Node::WhileStatement { .. }
            | Node::ConditionalStatement { .. }
            | Node::StructStatement { .. }) => Err(RuntimeError::ExpectedExpression {
                found: statement.describe().to_string(),
            }),
        }
    }

    fn get_property(&mut self, object: Value, property: &str) -> Result<Value> {
        match object {
            Value::Record(fields) => {
                fields
                    .get(property)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownProperty {
                        property: property.to_string(),
                    })
            }
            Value::Canvas(canvas) => match property {
                "get" => Ok(Value::Builtin(Builtin::CanvasGet(canvas))),
                "fill" => Ok(Value::Builtin(Builtin::CanvasFill(canvas))),
                "erase" => Ok(Value::Builtin(Builtin::CanvasErase(canvas))),
                _ => Err(RuntimeError::UnknownProperty {
                    property: property.to_string(),
                }),
            },
            other => Err(RuntimeError::HasNoProperties {
                found: other.type_name().to_string(),
            }),
        }
    }
}

fn get_index(object: Value, index: Value) -> Result<Value> {
    match (object, index) {
        (Value::Array(items), Value::Number(n)) => {
            if n.fract() != 0.0 || n < 0.0 || n as usize >= items.len() {
                return Err(RuntimeError::IndexOutOfBounds {
                    index: n,
                    len: items.len(),
                });
            }
            Ok(items[n as usize].clone())
        }
        (Value::Array(_), other) => Err(RuntimeError::InvalidIndex {
            found: other.type_name().to_string(),
        }),
        (Value::Record(fields), Value::Str(key)) => fields
            .get(&key)
            .cloned()
            .ok_or(RuntimeError::UnknownProperty { property: key }),
        (Value::Record(_), other) => Err(RuntimeError::InvalidIndex {
            found: other.type_name().to_string(),
        }),
        (other, _) => Err(RuntimeError::NotIndexable {
            found: other.type_name().to_string(),
        }),
    }
}

fn apply_binary(operator: BinOp, left: Value, right: Value) -> Result<Value> {
    let unsupported = |left: &Value, right: &Value| RuntimeError::OperationNotSupported {
        operator,
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    };
    match operator {
        BinOp::Add => match (&left, &right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
            _ => Err(unsupported(&left, &right)),
        },
        BinOp::Sub | BinOp::Mul | BinOp::Div => match (&left, &right) {
            (Value::Number(l), Value::Number(r)) => {
                // division follows IEEE doubles, so x / 0 is inf or nan
                let result = match operator {
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    _ => l / r,
                };
                Ok(Value::Number(result))
            }
            _ => Err(unsupported(&left, &right)),
        },
        BinOp::Equiv => Ok(Value::Bool(left == right)),
        BinOp::NotEquiv => Ok(Value::Bool(left != right)),
        BinOp::Lt | BinOp::Lte | BinOp::Gt | BinOp::Gte => {
            let ordering = match (&left, &right) {
                (Value::Number(l), Value::Number(r)) => {
                    l.partial_cmp(r).ok_or_else(|| unsupported(&left, &right))?
                }
                (Value::Str(l), Value::Str(r)) => l.cmp(r),
                _ => return Err(unsupported(&left, &right)),
            };
            let holds = match operator {
                BinOp::Lt => ordering.is_lt(),
                BinOp::Lte => ordering.is_le(),
                BinOp::Gt => ordering.is_gt(),
                _ => ordering.is_ge(),
            };
            Ok(Value::Bool(holds))
        }
        BinOp::And | BinOp::Or => match (&left, &right) {
            (Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(if operator == BinOp::And {
                *l && *r
            } else {
                *l || *r
            })),
            _ => Err(unsupported(&left, &right)),
        },
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree_walk::token::Literal;

    fn number(n: f64) -> Node {
        Node::Literal(Literal::Number(n))
    }

    fn var(name: &str) -> Node {
        Node::Variable {
            name: name.to_string(),
            initializer: None,
        }
    }

    fn declare(name: &str, value: Node) -> Node {
        Node::Variable {
            name: name.to_string(),
            initializer: Some(Box::new(value)),
        }
    }

    fn binary(left: Node, operator: BinOp, right: Node) -> Node {
        Node::BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    #[test]
    fn arithmetic_and_concatenation() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        let sum = binary(number(2.0), BinOp::Add, number(3.0));
        assert_eq!(
            Value::Number(5.0),
            interpreter.evaluate(&sum, &scope).unwrap()
        );

        let glued = binary(
            Node::Literal(Literal::Str("ab".into())),
            BinOp::Add,
            Node::Literal(Literal::Str("cd".into())),
        );
        assert_eq!(
            Value::Str("abcd".into()),
            interpreter.evaluate(&glued, &scope).unwrap()
        );
    }

    #[test]
    fn mixed_operands_are_rejected() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        let bad = binary(
            number(1.0),
            BinOp::Add,
            Node::Literal(Literal::Str("x".into())),
        );
        assert_eq!(
            RuntimeError::OperationNotSupported {
                operator: BinOp::Add,
                left: "number".to_string(),
                right: "string".to_string(),
            },
            interpreter.evaluate(&bad, &scope).unwrap_err()
        );
    }

    #[test]
    fn division_by_zero_follows_doubles() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        let quotient = binary(number(1.0), BinOp::Div, number(0.0));
        assert_eq!(
            Value::Number(f64::INFINITY),
            interpreter.evaluate(&quotient, &scope).unwrap()
        );
    }

    #[test]
    fn logic_requires_booleans() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        let both = binary(
            Node::Literal(Literal::Bool(true)),
            BinOp::And,
            Node::Literal(Literal::Bool(false)),
        );
        assert_eq!(
            Value::Bool(false),
            interpreter.evaluate(&both, &scope).unwrap()
        );

        let bad = binary(Node::Literal(Literal::Bool(true)), BinOp::And, number(1.0));
        assert!(interpreter.evaluate(&bad, &scope).is_err());
    }

    #[test]
    fn declarations_bind_and_overwrite() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("x", number(1.0)), &scope)
            .unwrap();
        interpreter
            .execute(&declare("x", number(2.0)), &scope)
            .unwrap();
        assert_eq!(
            Value::Number(2.0),
            interpreter.evaluate(&var("x"), &scope).unwrap()
        );
    }

    #[test]
    fn unknown_variables_fail() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        assert_eq!(
            RuntimeError::NotInScope {
                name: "ghost".to_string()
            },
            interpreter.evaluate(&var("ghost"), &scope).unwrap_err()
        );
    }

    #[test]
    fn statement_shaped_nodes_cannot_be_evaluated() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        let statement = declare("x", number(1.0));
        assert_eq!(
            RuntimeError::ExpectedExpression {
                found: "variable declaration".to_string()
            },
            interpreter.evaluate(&statement, &scope).unwrap_err()
        );
    }

    #[test]
    fn for_loop_runs_the_half_open_range() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("total", number(0.0)), &scope)
            .unwrap();
        let body = vec![declare(
            "total",
            binary(var("total"), BinOp::Add, number(1.0)),
        )];
        interpreter
            .execute(
                &Node::ForStatement {
                    variable: "i".to_string(),
                    start: Box::new(number(0.0)),
                    end: Box::new(number(5.0)),
                    body,
                },
                &scope,
            )
            .unwrap();
        // the loop variable lives in the loop-local copy and never leaks
        assert!(interpreter.evaluate(&var("i"), &scope).is_err());
        // outer binding untouched by the loop-local increments
        assert_eq!(
            Value::Number(0.0),
            interpreter.evaluate(&var("total"), &scope).unwrap()
        );
    }

    #[test]
    fn for_loop_with_nan_bound_does_not_iterate() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        // NaN compares false both ways, so the loop must exit immediately
        // instead of running forever; the body returning would surface as
        // Flow::Return if any iteration ran
        let nan_start = binary(number(0.0), BinOp::Div, number(0.0));
        let flow = interpreter
            .execute(
                &Node::ForStatement {
                    variable: "i".to_string(),
                    start: Box::new(nan_start),
                    end: Box::new(number(5.0)),
                    body: vec![Node::ReturnStatement {
                        value: Box::new(number(1.0)),
                    }],
                },
                &scope,
            )
            .unwrap();
        assert_eq!(Flow::Normal, flow);
    }

    #[test]
    fn for_end_bound_is_re_evaluated_each_iteration() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("limit", number(10.0)), &scope)
            .unwrap();
        // body shrinks the (loop-local) limit so the loop stops early
        let body = vec![declare(
            "limit",
            binary(var("limit"), BinOp::Sub, number(1.0)),
        )];
        let flow = interpreter
            .execute(
                &Node::ForStatement {
                    variable: "i".to_string(),
                    start: Box::new(number(0.0)),
                    end: Box::new(var("limit")),
                    body,
                },
                &scope,
            )
            .unwrap();
        assert_eq!(Flow::Normal, flow);
        assert_eq!(
            Value::Number(10.0),
            interpreter.evaluate(&var("limit"), &scope).unwrap()
        );
    }

    #[test]
    fn while_runs_in_the_current_scope() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("n", number(0.0)), &scope)
            .unwrap();
        let condition = binary(var("n"), BinOp::Lt, number(3.0));
        let body = vec![declare("n", binary(var("n"), BinOp::Add, number(1.0)))];
        interpreter
            .execute(
                &Node::WhileStatement {
                    condition: Box::new(condition),
                    body,
                },
                &scope,
            )
            .unwrap();
        assert_eq!(
            Value::Number(3.0),
            interpreter.evaluate(&var("n"), &scope).unwrap()
        );
    }

    #[test]
    fn conditionals_take_exactly_one_branch() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("x", number(2.0)), &scope)
            .unwrap();
        let chain = Node::ConditionalStatement {
            condition: Box::new(binary(var("x"), BinOp::Equiv, number(1.0))),
            body: vec![declare("branch", Node::Literal(Literal::Str("if".into())))],
            otherwise: vec![Node::ConditionalStatement {
                condition: Box::new(binary(var("x"), BinOp::Equiv, number(2.0))),
                body: vec![declare("branch", Node::Literal(Literal::Str("elif".into())))],
                otherwise: vec![Node::ConditionalStatement {
                    condition: Box::new(Node::Literal(Literal::Bool(true))),
                    body: vec![declare("branch", Node::Literal(Literal::Str("else".into())))],
                    otherwise: vec![],
                }],
            }],
        };
        interpreter.execute(&chain, &scope).unwrap();
        assert_eq!(
            Value::Str("elif".into()),
            interpreter.evaluate(&var("branch"), &scope).unwrap()
        );
    }

    #[test]
    fn indexing_arrays_and_records() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(
                &declare("xs", Node::ArrayLiteral(vec![number(7.0), number(8.0)])),
                &scope,
            )
            .unwrap();
        let first = Node::Get {
            object: Box::new(var("xs")),
            property: Access::Indexed(Box::new(number(1.0))),
        };
        assert_eq!(
            Value::Number(8.0),
            interpreter.evaluate(&first, &scope).unwrap()
        );

        let out_of_bounds = Node::Get {
            object: Box::new(var("xs")),
            property: Access::Indexed(Box::new(number(2.0))),
        };
        assert_eq!(
            RuntimeError::IndexOutOfBounds {
                index: 2.0,
                len: 2
            },
            interpreter.evaluate(&out_of_bounds, &scope).unwrap_err()
        );
    }

    #[test]
    fn set_requires_a_bound_record() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("n", number(1.0)), &scope)
            .unwrap();
        let set = Node::Set {
            target: "n".to_string(),
            property: "r".to_string(),
            value: Box::new(number(0.0)),
        };
        assert_eq!(
            RuntimeError::SetTargetNotRecord {
                name: "n".to_string(),
                found: "number".to_string(),
            },
            interpreter.execute(&set, &scope).unwrap_err()
        );
    }

    #[test]
    fn top_level_return_is_an_error() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        let program = vec![Node::ReturnStatement {
            value: Box::new(number(1.0)),
        }];
        assert_eq!(
            RuntimeError::ReturnOutsideFunction,
            interpreter.run(&program, &scope).unwrap_err()
        );
    }

    #[test]
    fn instances_validate_their_member_keys() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(
                &Node::StructStatement {
                    name: "Point".to_string(),
                    members: vec!["x".to_string(), "y".to_string()],
                },
                &scope,
            )
            .unwrap();

        let good = Node::Instance {
            name: "Point".to_string(),
            members: vec![("x".to_string(), number(1.0)), ("y".to_string(), number(2.0))],
        };
        let Value::Record(fields) = interpreter.evaluate(&good, &scope).unwrap() else {
            panic!("instance did not produce a record");
        };
        assert_eq!(Some(&Value::Number(2.0)), fields.get("y"));

        let bad = Node::Instance {
            name: "Point".to_string(),
            members: vec![("z".to_string(), number(3.0))],
        };
        assert_eq!(
            RuntimeError::InvalidMember {
                member: "z".to_string(),
                name: "Point".to_string(),
            },
            interpreter.evaluate(&bad, &scope).unwrap_err()
        );
    }

    #[test]
    fn function_calls_copy_the_defining_scope() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        interpreter
            .execute(&declare("x", number(1.0)), &scope)
            .unwrap();
        // mutate x inside; the caller's x must be untouched
        interpreter
            .execute(
                &Node::FunctionStatement {
                    name: "clobber".to_string(),
                    params: vec![],
                    body: vec![declare("x", number(99.0))],
                },
                &scope,
            )
            .unwrap();
        interpreter
            .evaluate(
                &Node::Call {
                    callee: Box::new(var("clobber")),
                    args: vec![],
                },
                &scope,
            )
            .unwrap();
        assert_eq!(
            Value::Number(1.0),
            interpreter.evaluate(&var("x"), &scope).unwrap()
        );
    }

    #[test]
    fn functions_defined_later_are_visible_to_earlier_ones() {
        let mut interpreter = Interpreter::new();
        let scope = Scope::new();
        // first calls second even though second is defined afterwards,
        // because the closure aliases the live defining scope
        interpreter
            .execute(
                &Node::FunctionStatement {
                    name: "first".to_string(),
                    params: vec![],
                    body: vec![Node::ReturnStatement {
                        value: Box::new(Node::Call {
                            callee: Box::new(var("second")),
                            args: vec![],
                        }),
                    }],
                },
                &scope,
            )
            .unwrap();
        interpreter
            .execute(
                &Node::FunctionStatement {
                    name: "second".to_string(),
                    params: vec![],
                    body: vec![Node::ReturnStatement {
                        value: Box::new(number(42.0)),
                    }],
                },
                &scope,
            )
            .unwrap();
        let result = interpreter
            .evaluate(
                &Node::Call {
                    callee: Box::new(var("first")),
                    args: vec![],
                },
                &scope,
            )
            .unwrap();
        assert_eq!(Value::Number(42.0), result);
    }
}
