//! Scott encoding of algebraic data types
//!
//! A value of a data type with constructors `c_1 .. c_n` is a function that
//! takes one continuation per constructor and calls the one belonging to the
//! constructor that built it:
//!
//! ```text
//! data option = some x | none
//!
//! val some = fun x => fun some => fun none => some x
//! val none = fun some => fun none => none
//! ```
//!
//! The continuations are named after the constructors themselves, so inside a
//! constructor body the constructor's own name refers to its continuation.

use crate::ast::{Constructor, DataType};
use crate::core::{CoreExpr, CoreIdent, CoreStatement, CoreVal};

use super::error::DesugarError;

/// One `val` per constructor, in declaration order.
pub fn desugar_data_type(data: DataType) -> Result<Vec<CoreStatement>, DesugarError> {
    if data.constructors.is_empty() {
        return Err(DesugarError::EmptyDataType {
            name: data.name.value,
            span: data.position,
        });
    }

    let continuations: Vec<CoreIdent> = data
        .constructors
        .iter()
        .map(|ctor| CoreIdent::new(ctor.name.value.clone(), ctor.position.clone()))
        .collect();

    Ok(data
        .constructors
        .iter()
        .map(|ctor| encode_constructor(ctor, &continuations))
        .collect())
}

fn encode_constructor(ctor: &Constructor, continuations: &[CoreIdent]) -> CoreStatement {
    let position = ctor.position.clone();
    let fields: Vec<CoreIdent> = ctor
        .fields
        .iter()
        .map(|field| CoreIdent::new(field.value.clone(), field.position.clone()))
        .collect();

    // the continuation named after this constructor, fed the fields in order
    let body = CoreExpr::applications(
        CoreExpr::ident(ctor.name.value.clone(), position.clone()),
        fields
            .iter()
            .map(|field| CoreExpr::Ident(field.clone()))
            .collect(),
        position.clone(),
    );

    let params = fields
        .into_iter()
        .chain(continuations.iter().cloned())
        .collect();

    CoreStatement::Val(CoreVal {
        name: CoreIdent::new(ctor.name.value.clone(), position.clone()),
        value: CoreExpr::lambdas(params, body, position.clone()),
        position,
    })
}
