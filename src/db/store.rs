//! Store facade with change notifications.
//!
//! The UI layer never polls: every mutation goes through the store, which
//! notifies subscribers synchronously so they can re-read their query.
//! This is the CLI rendition of a live, reactive list binding.

use crate::db::log::journal;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::bag::CoffeeBag;
use crate::models::brew::CoffeeBrew;
use std::cell::RefCell;
use std::rc::Rc;

/// Which collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Bags,
    Brews,
}

type Subscriber = Box<dyn Fn(Change)>;

pub struct Store {
    pool: DbPool,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    pending: RefCell<Vec<Change>>,
}

impl Store {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
            subscribers: Rc::new(RefCell::new(Vec::new())),
            pending: RefCell::new(Vec::new()),
        })
    }

    /// Register a change observer. Observers run synchronously after each
    /// mutation, on the same (main) loop as everything else.
    pub fn subscribe<F: Fn(Change) + 'static>(&self, f: F) {
        self.subscribers.borrow_mut().push(Box::new(f));
    }

    /// Drain the changes accumulated since the last call. Command handlers
    /// use this to re-read the queries a mutation invalidated.
    pub fn take_changes(&self) -> Vec<Change> {
        self.pending.borrow_mut().drain(..).collect()
    }

    fn notify(&self, change: Change) {
        self.pending.borrow_mut().push(change);
        for sub in self.subscribers.borrow().iter() {
            sub(change);
        }
    }

    // -- bags ---------------------------------------------------------

    pub fn insert_bag(&mut self, bag: &CoffeeBag) -> AppResult<i64> {
        let id = queries::insert_bag(&self.pool.conn, bag)?;
        journal(&self.pool.conn, "bag.add", &id.to_string(), &bag.name)?;
        self.notify(Change::Bags);
        Ok(id)
    }

    pub fn update_bag(&mut self, bag: &CoffeeBag) -> AppResult<()> {
        queries::update_bag(&self.pool.conn, bag)?;
        journal(&self.pool.conn, "bag.edit", &bag.id.to_string(), &bag.name)?;
        self.notify(Change::Bags);
        Ok(())
    }

    pub fn delete_bag(&mut self, id: i64) -> AppResult<()> {
        queries::delete_bag(&self.pool.conn, id)?;
        journal(&self.pool.conn, "bag.del", &id.to_string(), "")?;
        self.notify(Change::Bags);
        Ok(())
    }

    pub fn get_bag(&self, id: i64) -> AppResult<CoffeeBag> {
        queries::get_bag(&self.pool.conn, id)
    }

    pub fn bags(&self) -> AppResult<Vec<CoffeeBag>> {
        queries::load_bags(&self.pool.conn)
    }

    // -- brews --------------------------------------------------------

    pub fn insert_brew(&mut self, brew: &CoffeeBrew) -> AppResult<i64> {
        let id = queries::insert_brew(&self.pool.conn, brew)?;
        journal(&self.pool.conn, "brew.add", &id.to_string(), &brew.name)?;
        self.notify(Change::Brews);
        Ok(id)
    }

    pub fn delete_brew(&mut self, id: i64) -> AppResult<()> {
        queries::delete_brew(&self.pool.conn, id)?;
        journal(&self.pool.conn, "brew.del", &id.to_string(), "")?;
        self.notify(Change::Brews);
        Ok(())
    }

    pub fn get_brew(&self, id: i64) -> AppResult<CoffeeBrew> {
        queries::get_brew(&self.pool.conn, id)
    }

    pub fn brews(&self) -> AppResult<Vec<CoffeeBrew>> {
        queries::load_brews(&self.pool.conn)
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}
