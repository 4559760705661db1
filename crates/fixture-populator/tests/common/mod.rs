//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use fixture_populator::{bean, Bean, BoxError, MethodDescriptor};

/// Install a test subscriber once; `RUST_LOG=fixture_populator=trace`
/// shows every resolution decision.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── Employee ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Employee {
    firstname: Option<String>,
    lastname: Option<String>,
    set_property: Option<String>,
    city: Option<String>,
    id: Option<i32>,
    technical_id: Option<i64>,
    start_time: Option<NaiveDateTime>,
    start_day: Option<NaiveDate>,
    salary: f64,
    bonus: Option<f32>,
    active: bool,
    no_prefix: Option<String>,
    different_prefix: Option<String>,
    supervisor: Option<Box<Employee>>,
    skills: Option<Vec<String>>,
}

impl Employee {
    pub fn firstname(&self) -> Option<&str> {
        self.firstname.as_deref()
    }

    pub fn set_firstname(&mut self, firstname: String) {
        self.firstname = Some(firstname);
    }

    pub fn lastname(&self) -> Option<&str> {
        self.lastname.as_deref()
    }

    pub fn set_lastname(&mut self, lastname: String) {
        self.lastname = Some(lastname);
    }

    pub fn set_property(&self) -> Option<&str> {
        self.set_property.as_deref()
    }

    pub fn set_set_property(&mut self, set_property: String) {
        self.set_property = Some(set_property);
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn set_city(&mut self, city: String) {
        self.city = Some(city);
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    pub fn technical_id(&self) -> Option<i64> {
        self.technical_id
    }

    pub fn set_technical_id(&mut self, technical_id: i64) {
        self.technical_id = Some(technical_id);
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: NaiveDateTime) {
        self.start_time = Some(start_time);
    }

    pub fn start_day(&self) -> Option<NaiveDate> {
        self.start_day
    }

    pub fn set_start_day(&mut self, start_day: NaiveDate) {
        self.start_day = Some(start_day);
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    pub fn bonus(&self) -> Option<f32> {
        self.bonus
    }

    pub fn set_bonus(&mut self, bonus: f32) {
        self.bonus = Some(bonus);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn get_no_prefix(&self) -> Option<&str> {
        self.no_prefix.as_deref()
    }

    pub fn no_prefix(&mut self, no_prefix: String) {
        self.no_prefix = Some(no_prefix);
    }

    pub fn hole_different_prefix(&self) -> Option<&str> {
        self.different_prefix.as_deref()
    }

    pub fn setze_different_prefix(&mut self, different_prefix: String) {
        self.different_prefix = Some(different_prefix);
    }

    pub fn supervisor(&self) -> Option<&Employee> {
        self.supervisor.as_deref()
    }

    pub fn set_supervisor(&mut self, supervisor: Employee) {
        self.supervisor = Some(Box::new(supervisor));
    }

    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref()
    }

    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.skills = Some(skills);
    }
}

bean! {
    Employee {
        fn firstname();
        fn set_firstname(String);
        fn lastname();
        fn set_lastname(String);
        fn set_property();
        fn set_set_property(String);
        fn city();
        fn set_city(String);
        fn id();
        fn set_id(i32);
        fn technical_id();
        fn set_technical_id(i64);
        fn start_time();
        fn set_start_time(NaiveDateTime);
        fn start_day();
        fn set_start_day(NaiveDate);
        fn salary();
        fn set_salary(f64);
        fn bonus();
        fn set_bonus(f32);
        fn is_active();
        fn set_active(bool);
        fn get_no_prefix();
        fn no_prefix(String);
        fn hole_different_prefix();
        fn setze_different_prefix(String);
        fn supervisor();
        fn set_supervisor(Employee);
        fn skills();
        fn set_skills(Vec<String>);
    }
}

// ── Beans that fail ─────────────────────────────────────────────────────

/// A bean whose constructor always fails.
#[derive(Debug)]
pub struct Unbuildable {
    pub name: Option<String>,
}

impl Bean for Unbuildable {
    fn construct() -> Result<Self, BoxError> {
        Err("constructor is not accessible".into())
    }

    fn methods() -> Vec<MethodDescriptor<Self>> {
        vec![MethodDescriptor::setter(
            "set_name",
            |bean: &mut Unbuildable, name: String| bean.name = Some(name),
        )]
    }
}

/// A bean whose `set_amount` mutator rejects negative values.
#[derive(Debug, Default)]
pub struct Ledger {
    pub amount: Option<i64>,
    pub memo: Option<String>,
}

impl Bean for Ledger {
    fn construct() -> Result<Self, BoxError> {
        Ok(Self::default())
    }

    fn methods() -> Vec<MethodDescriptor<Self>> {
        vec![
            MethodDescriptor::try_setter("set_amount", |bean: &mut Ledger, amount: i64| {
                if amount < 0 {
                    return Err(format!("negative amount {amount}"));
                }
                bean.amount = Some(amount);
                Ok(())
            }),
            MethodDescriptor::setter("set_memo", |bean: &mut Ledger, memo: String| {
                bean.memo = Some(memo)
            }),
        ]
    }
}
