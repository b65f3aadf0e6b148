use crate::{
    ast::{
        FunctionDefStatement, IfStatement, LetStatement, ReturnStatement, Statement,
        visitor::{Node, Visitor},
    },
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Evaluator, Signal},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates statements in order and yields the value of the last one.
    ///
    /// The first `return` or error stops the list and is passed on
    /// unchanged. An empty list yields [`Value::Null`].
    pub(super) fn eval_statements(&mut self,
                                  statements: &[Statement],
                                  frame: FrameId)
                                  -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in statements {
            result = statement.accept(self, frame)?;
        }
        Ok(result)
    }

    /// Binds the value of a `let` in the current frame and yields it.
    pub(super) fn eval_let(&mut self, node: &LetStatement, frame: FrameId) -> EvalResult<Value> {
        let Some(name) = &node.name else {
            return Err(RuntimeError::Missing { slot: "Let name" }.into());
        };

        let value = self.eval_required(node.value.as_ref(), "Let value", frame)?;
        self.set(frame, &name.name, value.clone());

        Ok(value)
    }

    pub(super) fn eval_return(&mut self,
                              node: &ReturnStatement,
                              frame: FrameId)
                              -> EvalResult<Value> {
        let value = self.eval_required(node.value.as_ref(), "Return value", frame)?;
        Err(Signal::Return(value))
    }

    /// Runs one branch of an `if` in the current frame.
    ///
    /// The condition has to be a boolean; nothing is converted to one. A
    /// false condition without an `else` yields [`Value::Null`].
    pub(super) fn eval_if(&mut self, node: &IfStatement, frame: FrameId) -> EvalResult<Value> {
        let condition = self.eval_required(node.condition.as_ref(), "Condition", frame)?;

        match condition {
            Value::Boolean(true) => self.visit_block(&node.consequence, frame),
            Value::Boolean(false) => match &node.alternative {
                Some(alternative) => self.visit_block(alternative, frame),
                None => Ok(Value::Null),
            },
            _ => Err(RuntimeError::ConditionNotBoolean.into()),
        }
    }

    /// Binds a named function in the current frame and yields it.
    pub(super) fn eval_function_def(&mut self,
                                    node: &FunctionDefStatement,
                                    frame: FrameId)
                                    -> EvalResult<Value> {
        let function = Value::Function(Self::capture(&node.parameters, &node.body)?);
        self.set(frame, &node.name.name, function.clone());

        Ok(function)
    }
}
