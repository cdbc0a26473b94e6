use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::context::CastContext;
use crate::error::{Error, Result};
use crate::type_info::PgType;
use crate::types;
use crate::value::Value;

/// Identifies a live connection scope within a [`TypeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

/// Identifies a live statement scope within a [`TypeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatementId(u64);

/// The tier a type-to-caster binding is registered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Connection(ConnectionId),
    Statement(StatementId),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Connection(ConnectionId(id)) => write!(f, "connection {id}"),
            Scope::Statement(StatementId(id)) => write!(f, "statement {id}"),
        }
    }
}

/// One tier of bindings: wire OID to type.
#[derive(Default)]
struct Typecasts {
    entries: HashMap<u32, Arc<PgType>>,
}

impl Typecasts {
    /// Claims every OID in the type's set. A later registration for an
    /// already-claimed OID silently overwrites the earlier one.
    fn insert(&mut self, ty: &Arc<PgType>) {
        for &oid in ty.oids() {
            self.entries.insert(oid, Arc::clone(ty));
        }
    }

    fn get(&self, oid: u32) -> Option<&Arc<PgType>> {
        self.entries.get(&oid)
    }
}

/// Scoped store of type-to-caster bindings.
///
/// Holds one global tier plus one tier per open connection and statement.
/// Lookup precedence when casting a column is statement, then the owning
/// connection, then global, then a pass-through text sentinel.
///
/// The registry itself is synchronous; a process-wide instance shared
/// across threads belongs behind a lock, with global-tier registration
/// treated as configuration done before concurrent reads begin.
pub struct TypeRegistry {
    global: Typecasts,
    connections: HashMap<ConnectionId, Typecasts>,
    statements: HashMap<StatementId, (ConnectionId, Typecasts)>,
    next_id: u64,
}

impl TypeRegistry {
    /// Creates a registry with the built-in types in the global tier.
    pub fn new() -> Self {
        let mut global = Typecasts::default();
        for ty in types::builtins() {
            global.insert(ty);
        }

        Self {
            global,
            connections: HashMap::new(),
            statements: HashMap::new(),
            next_id: 0,
        }
    }

    /// Creates a registry with an empty global tier. Every unclaimed OID
    /// resolves to the pass-through text sentinel.
    pub fn empty() -> Self {
        Self {
            global: Typecasts::default(),
            connections: HashMap::new(),
            statements: HashMap::new(),
            next_id: 0,
        }
    }

    /// Opens a connection-lifetime scope.
    pub fn open_connection(&mut self) -> ConnectionId {
        let id = ConnectionId(self.next_id());
        self.connections.insert(id, Typecasts::default());
        id
    }

    /// Discards a connection scope and every statement scope it owns.
    pub fn close_connection(&mut self, id: ConnectionId) {
        self.connections.remove(&id);
        self.statements.retain(|_, (conn, _)| *conn != id);
    }

    /// Opens a statement-lifetime scope under `conn`.
    pub fn open_statement(&mut self, conn: ConnectionId) -> Result<StatementId> {
        if !self.connections.contains_key(&conn) {
            return Err(Error::InvalidScope(Scope::Connection(conn)));
        }

        let id = StatementId(self.next_id());
        self.statements.insert(id, (conn, Typecasts::default()));
        Ok(id)
    }

    /// Discards a statement scope.
    pub fn close_statement(&mut self, id: StatementId) {
        self.statements.remove(&id);
    }

    /// Registers `ty` into the chosen scope, claiming every OID in its set
    /// within that scope only.
    ///
    /// Fails with [`Error::InvalidScope`] if the scope names a connection or
    /// statement that is not currently open.
    pub fn register(&mut self, ty: Arc<PgType>, scope: Scope) -> Result<()> {
        let casts = match scope {
            Scope::Global => &mut self.global,
            Scope::Connection(id) => self
                .connections
                .get_mut(&id)
                .ok_or(Error::InvalidScope(scope))?,
            Scope::Statement(id) => {
                &mut self
                    .statements
                    .get_mut(&id)
                    .ok_or(Error::InvalidScope(scope))?
                    .1
            }
        };

        trace!(type_name = ty.name(), %scope, "registering type");
        casts.insert(&ty);
        Ok(())
    }

    /// Resolves the type for `oid` in precedence order: the statement tier,
    /// then the connection tier (the explicit `connection`, or the
    /// statement's owning connection when not given), then the global tier,
    /// then the pass-through text sentinel.
    pub fn resolve(
        &self,
        oid: u32,
        statement: Option<StatementId>,
        connection: Option<ConnectionId>,
    ) -> Arc<PgType> {
        let statement = statement.and_then(|id| self.statements.get(&id));

        if let Some((_, casts)) = statement {
            if let Some(ty) = casts.get(oid) {
                return Arc::clone(ty);
            }
        }

        let connection = connection.or_else(|| statement.map(|(conn, _)| *conn));
        if let Some(casts) = connection.and_then(|id| self.connections.get(&id)) {
            if let Some(ty) = casts.get(oid) {
                return Arc::clone(ty);
            }
        }

        if let Some(ty) = self.global.get(oid) {
            return Arc::clone(ty);
        }

        trace!(oid, "no registered type; falling back to pass-through text");
        types::text_passthrough()
    }

    /// Resolves and casts one raw column value. This is the boundary used
    /// by the result-row consumer, once per column per row.
    pub fn resolve_and_cast(
        &self,
        oid: u32,
        raw: &[u8],
        len: usize,
        statement: Option<StatementId>,
        cx: &CastContext<'_>,
    ) -> Result<Value> {
        self.resolve(oid, statement, None).cast(raw, len, cx)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Scope, TypeRegistry};
    use crate::context::CastContext;
    use crate::error::Error;
    use crate::type_info::PgType;
    use crate::value::Value;

    fn answer(n: i64) -> Arc<PgType> {
        PgType::new(vec![99], "ANSWER", move |_raw, _cx| Ok(Value::Int(n)))
    }

    #[test]
    fn last_registration_wins_within_a_scope() {
        let mut registry = TypeRegistry::empty();
        registry.register(answer(1), Scope::Global).unwrap();
        registry.register(answer(2), Scope::Global).unwrap();

        let cx = CastContext::new("UTF8");
        let value = registry.resolve_and_cast(99, b"x", 1, None, &cx).unwrap();
        assert_eq!(value, Value::Int(2));
    }

    #[test]
    fn statement_scope_shadows_global() {
        let mut registry = TypeRegistry::empty();
        registry.register(answer(1), Scope::Global).unwrap();

        let conn = registry.open_connection();
        let stmt = registry.open_statement(conn).unwrap();
        registry
            .register(answer(2), Scope::Statement(stmt))
            .unwrap();

        let other_conn = registry.open_connection();
        let other_stmt = registry.open_statement(other_conn).unwrap();

        let cx = CastContext::new("UTF8");
        assert_eq!(
            registry.resolve_and_cast(99, b"", 0, Some(stmt), &cx).unwrap(),
            Value::Int(2)
        );
        assert_eq!(
            registry
                .resolve_and_cast(99, b"", 0, Some(other_stmt), &cx)
                .unwrap(),
            Value::Int(1)
        );
        assert_eq!(
            registry.resolve_and_cast(99, b"", 0, None, &cx).unwrap(),
            Value::Int(1)
        );
    }

    #[test]
    fn connection_scope_applies_to_its_statements() {
        let mut registry = TypeRegistry::empty();
        let conn = registry.open_connection();
        registry
            .register(answer(7), Scope::Connection(conn))
            .unwrap();
        let stmt = registry.open_statement(conn).unwrap();

        let cx = CastContext::new("UTF8");
        assert_eq!(
            registry.resolve_and_cast(99, b"", 0, Some(stmt), &cx).unwrap(),
            Value::Int(7)
        );
    }

    #[test]
    fn unclaimed_oid_falls_back_to_text() {
        let registry = TypeRegistry::empty();
        let cx = CastContext::new("UTF8");
        let value = registry
            .resolve_and_cast(424242, b"as-is", 5, None, &cx)
            .unwrap();
        assert_eq!(value, Value::Text("as-is".into()));
    }

    #[test]
    fn closed_scopes_reject_registration() {
        let mut registry = TypeRegistry::empty();
        let conn = registry.open_connection();
        let stmt = registry.open_statement(conn).unwrap();

        registry.close_statement(stmt);
        assert!(matches!(
            registry.register(answer(1), Scope::Statement(stmt)),
            Err(Error::InvalidScope(_))
        ));

        registry.close_connection(conn);
        assert!(matches!(
            registry.register(answer(1), Scope::Connection(conn)),
            Err(Error::InvalidScope(_))
        ));
        assert!(registry.open_statement(conn).is_err());
    }

    #[test]
    fn closing_a_connection_closes_its_statements() {
        let mut registry = TypeRegistry::empty();
        let conn = registry.open_connection();
        let stmt = registry.open_statement(conn).unwrap();

        registry.close_connection(conn);
        assert!(matches!(
            registry.register(answer(1), Scope::Statement(stmt)),
            Err(Error::InvalidScope(_))
        ));
    }
}
