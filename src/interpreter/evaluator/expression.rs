use crate::{
    ast::{ArrayLiteral, CallExpr, IndexExpr, visitor::Node},
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::index_in,
};

impl Evaluator {
    /// Evaluates the elements of an array literal left to right.
    ///
    /// Every element is evaluated even after one has failed; any failure
    /// turns the whole literal into [`RuntimeError::InvalidArrayElements`].
    pub(super) fn eval_array(&mut self, node: &ArrayLiteral, frame: FrameId) -> EvalResult<Value> {
        let mut elements = Vec::with_capacity(node.elements.len());
        for element in &node.elements {
            let Some(element) = element else {
                return Err(RuntimeError::Missing { slot: "Array element" }.into());
            };
            elements.push(element.accept(self, frame));
        }

        let elements: Result<Vec<_>, _> = elements.into_iter().collect();
        elements.map(Value::from)
                .map_err(|_| RuntimeError::InvalidArrayElements.into())
    }

    /// Evaluates the callee, then the arguments left to right, then calls.
    pub(super) fn eval_call(&mut self, node: &CallExpr, frame: FrameId) -> EvalResult<Value> {
        let callee = self.eval_required(node.callee.as_deref(), "Callee", frame)?;
        let function = callee.as_function(RuntimeError::NotAFunction)?;

        let mut arguments = Vec::with_capacity(node.arguments.len());
        for argument in &node.arguments {
            arguments.push(self.eval_required(argument.as_ref(), "Argument", frame)?);
        }

        self.call_function(function, arguments, frame)
    }

    /// Evaluates `array[index]`.
    ///
    /// The array is checked before the index is evaluated.
    pub(super) fn eval_index(&mut self, node: &IndexExpr, frame: FrameId) -> EvalResult<Value> {
        let array = self.eval_required(node.array.as_deref(), "Array", frame)?;
        let elements = array.as_array(RuntimeError::NotAnArray)?;

        let Value::Integer(index) = self.eval_required(node.index.as_deref(), "Index", frame)? else {
            return Err(RuntimeError::IndexNotInteger.into());
        };

        index_in(index, elements.len()).map(|i| elements[i].clone())
                                       .ok_or_else(|| RuntimeError::IndexOutOfBounds.into())
    }
}
