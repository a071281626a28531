use crate::ast::{BinaryOp, Location, Parameter, Program, Term, TermKind};
use bumpalo::Bump;
use core::cell::Cell;

/// Builds terms directly in an arena, without going through a document.
///
/// Each node receives a distinct synthetic location (`n..n+1` in creation
/// order) so anonymous closures built this way never share an identity.
///
/// # Example
///
/// ```
/// use rinha_core::ast::{BinaryOp, TermBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let b = TermBuilder::new(&arena, "sum.rinha");
/// let sum = b.binary(b.int(1), BinaryOp::Add, b.int(2));
/// let program = b.program("sum", b.print(sum));
/// assert_eq!(program.name, "sum");
/// ```
pub struct TermBuilder<'a> {
    arena: &'a Bump,
    filename: &'a str,
    next_offset: Cell<usize>,
}

impl<'a> TermBuilder<'a> {
    pub fn new(arena: &'a Bump, filename: &str) -> Self {
        Self {
            arena,
            filename: arena.alloc_str(filename),
            next_offset: Cell::new(0),
        }
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    fn location(&self) -> Location<'a> {
        let start = self.next_offset.get();
        self.next_offset.set(start + 1);
        Location::new(start, start + 1, self.filename)
    }

    fn term(&self, kind: TermKind<'a>) -> &'a Term<'a> {
        let location = self.location();
        self.arena.alloc(Term { kind, location })
    }

    pub fn parameter(&self, text: &str) -> Parameter<'a> {
        Parameter {
            text: self.arena.alloc_str(text),
            location: self.location(),
        }
    }

    pub fn int(&self, value: i32) -> &'a Term<'a> {
        self.term(TermKind::Int(value))
    }

    pub fn str(&self, value: &str) -> &'a Term<'a> {
        self.term(TermKind::Str(self.arena.alloc_str(value)))
    }

    pub fn bool(&self, value: bool) -> &'a Term<'a> {
        self.term(TermKind::Bool(value))
    }

    pub fn var(&self, name: &str) -> &'a Term<'a> {
        self.term(TermKind::Var(self.arena.alloc_str(name)))
    }

    pub fn function(&self, parameters: &[&str], body: &'a Term<'a>) -> &'a Term<'a> {
        let parameters = self
            .arena
            .alloc_slice_fill_iter(parameters.iter().map(|name| self.parameter(name)));
        self.term(TermKind::Function { parameters, body })
    }

    pub fn call(&self, callee: &'a Term<'a>, arguments: &[&'a Term<'a>]) -> &'a Term<'a> {
        let arguments = self.arena.alloc_slice_copy(arguments);
        self.term(TermKind::Call { callee, arguments })
    }

    pub fn let_(&self, name: &str, value: &'a Term<'a>, next: &'a Term<'a>) -> &'a Term<'a> {
        let name = self.parameter(name);
        self.term(TermKind::Let { name, value, next })
    }

    pub fn if_(
        &self,
        condition: &'a Term<'a>,
        then: &'a Term<'a>,
        otherwise: &'a Term<'a>,
    ) -> &'a Term<'a> {
        self.term(TermKind::If {
            condition,
            then,
            otherwise,
        })
    }

    pub fn binary(&self, lhs: &'a Term<'a>, op: BinaryOp, rhs: &'a Term<'a>) -> &'a Term<'a> {
        self.term(TermKind::Binary { lhs, op, rhs })
    }

    pub fn tuple(&self, first: &'a Term<'a>, second: &'a Term<'a>) -> &'a Term<'a> {
        self.term(TermKind::Tuple { first, second })
    }

    pub fn print(&self, value: &'a Term<'a>) -> &'a Term<'a> {
        self.term(TermKind::Print(value))
    }

    pub fn first(&self, value: &'a Term<'a>) -> &'a Term<'a> {
        self.term(TermKind::First(value))
    }

    pub fn second(&self, value: &'a Term<'a>) -> &'a Term<'a> {
        self.term(TermKind::Second(value))
    }

    pub fn program(&self, name: &str, expression: &'a Term<'a>) -> Program<'a> {
        Program {
            name: self.arena.alloc_str(name),
            expression,
            location: self.location(),
        }
    }
}
