//! Facts accumulated while walking through a proof.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Display;
use core::hash::Hash;
use euclid_parse::{CompoundSymbol, Formula, Number, Term};

/// Immutable HashMap for fast cloning of knowledge.
type FnvHashMap<K, V> = im::hashmap::HashMap<K, V, fnv::FnvBuildHasher>;
type FnvHashSet<T> = im::hashset::HashSet<T, fnv::FnvBuildHasher>;

/// Index of an interned term.
type Id = usize;

/// Interned term, referring to its factor by id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Node<S> {
    Symbol(S),
    Number(Number),
    Product(Number, Id),
}

/// Equivalence class of a term, or the term itself if it is unknown.
///
/// Unknown products may have known factors.
#[derive(Debug, PartialEq, Eq)]
enum Class<S> {
    Known(Id),
    Symbol(S),
    Number(Number),
    Product(Number, Box<Class<S>>),
}

/// Categories and equivalences known about terms.
///
/// Equivalences are stored in a union-find structure over interned terms,
/// using union by minimal id.
/// Terms are interned without parentheses, which carry no meaning.
/// Equivalences are closed under congruence:
/// after every union, products are rebuilt from their coefficient and
/// the class of their factor, and classes of equal products are merged.
/// Deciding equivalence therefore only compares classes.
///
/// Categories are attached to the representative of an equivalence class,
/// such that every category recorded for a term
/// also holds for all terms equivalent to it.
///
/// Knowledge only grows: nothing recorded is ever retracted.
/// Cloning is cheap, because all collections are persistent.
#[derive(Clone, Debug)]
pub struct Knowledge<S: Clone + Eq + Hash> {
    /// canonical nodes and the classes they belong to
    memo: FnvHashMap<Node<S>, Id>,
    nodes: im::Vector<Node<S>>,
    parents: im::Vector<Id>,
    categories: FnvHashMap<Id, FnvHashSet<CompoundSymbol<S>>>,
}

impl<S: Clone + Eq + Hash> Default for Knowledge<S> {
    fn default() -> Self {
        Self {
            memo: Default::default(),
            nodes: Default::default(),
            parents: Default::default(),
            categories: Default::default(),
        }
    }
}

impl<S: Clone + Eq + Hash> Knowledge<S> {
    /// Construct empty knowledge.
    ///
    /// ~~~
    /// # use euclid::Knowledge;
    /// # use euclid_parse::Term;
    /// let kb: Knowledge<&str> = Knowledge::new();
    /// assert!(kb.are_equivalent(&Term::Symbol("x"), &Term::Symbol("x")));
    /// assert!(!kb.are_equivalent(&Term::Symbol("x"), &Term::Symbol("y")));
    /// ~~~
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of terms that knowledge exists about.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the representative of an equivalence class.
    fn find(&self, mut id: Id) -> Id {
        while let Some(&parent) = self.parents.get(id) {
            if parent == id {
                break;
            }
            id = parent
        }
        id
    }

    fn canonical(&self, node: &Node<S>) -> Node<S> {
        match node {
            Node::Product(c, factor) => Node::Product(*c, self.find(*factor)),
            node => node.clone(),
        }
    }

    /// Return the class of a term, adding the term if it is unknown.
    fn intern(&mut self, tm: &Term<S>) -> Id {
        let node = match tm {
            Term::Symbol(s) => Node::Symbol(s.clone()),
            Term::Number(n) => Node::Number(*n),
            Term::Product(c, factor) => Node::Product(*c, self.intern(factor)),
            Term::Parenthesized(tm) => return self.intern(tm),
        };
        if let Some(id) = self.memo.get(&node) {
            return self.find(*id);
        }
        let id = self.nodes.len();
        self.nodes.push_back(node.clone());
        self.parents.push_back(id);
        self.memo.insert(node, id);
        id
    }

    /// Return the class of a term, without adding anything.
    fn class(&self, tm: &Term<S>) -> Class<S> {
        let node = match tm {
            Term::Symbol(s) => Node::Symbol(s.clone()),
            Term::Number(n) => Node::Number(*n),
            Term::Product(c, factor) => match self.class(factor) {
                Class::Known(factor) => Node::Product(*c, factor),
                factor => return Class::Product(*c, Box::new(factor)),
            },
            Term::Parenthesized(tm) => return self.class(tm),
        };
        match self.memo.get(&node) {
            Some(id) => Class::Known(self.find(*id)),
            None => match node {
                Node::Symbol(s) => Class::Symbol(s),
                Node::Number(n) => Class::Number(n),
                Node::Product(c, factor) => Class::Product(c, Box::new(Class::Known(factor))),
            },
        }
    }

    /// Merge two equivalence classes, together with their categories.
    ///
    /// Return false if the classes were already the same.
    fn link(&mut self, a: Id, b: Id) -> bool {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        let (parent, child) = (a.min(b), a.max(b));
        self.parents.set(child, parent);
        if let Some(child_cats) = self.categories.remove(&child) {
            let cats = self.categories.remove(&parent).unwrap_or_default();
            self.categories.insert(parent, cats.union(child_cats));
        }
        true
    }

    fn union(&mut self, a: Id, b: Id) {
        if self.link(a, b) {
            self.rebuild()
        }
    }

    /// Restore congruence after a union.
    ///
    /// Every pass canonicalises all nodes and merges the classes of equal nodes,
    /// until a pass finds nothing to merge.
    /// Every pass but the last one reduces the number of classes.
    fn rebuild(&mut self) {
        loop {
            let mut memo: FnvHashMap<Node<S>, Id> = FnvHashMap::default();
            let mut merges = Vec::new();
            for (id, node) in self.nodes.iter().enumerate() {
                let (node, id) = (self.canonical(node), self.find(id));
                match memo.get(&node) {
                    Some(&other) if other != id => merges.push((other, id)),
                    Some(_) => (),
                    None => {
                        memo.insert(node, id);
                    }
                }
            }
            self.memo = memo;
            if merges.is_empty() {
                return;
            }
            log::trace!("Merge {} classes by congruence", merges.len());
            for (a, b) in merges {
                self.link(a, b);
            }
        }
    }

    /// Record that two terms are equivalent.
    pub fn record_equivalence(&mut self, tm1: &Term<S>, tm2: &Term<S>)
    where
        S: Display,
    {
        log::debug!("Record {} = {}", tm1, tm2);
        let (id1, id2) = (self.intern(tm1), self.intern(tm2));
        self.union(id1, id2)
    }

    /// Record that a term belongs to a category.
    pub fn record_category(&mut self, tm: &Term<S>, category: &CompoundSymbol<S>)
    where
        S: Display,
    {
        log::debug!("Record {} is a {}", tm, category);
        let id = self.intern(tm);
        let mut cats = self.categories.get(&id).cloned().unwrap_or_default();
        cats.insert(category.clone());
        self.categories.insert(id, cats);
    }

    /// Record what a formula states.
    ///
    /// Conditional formulas state nothing that could be recorded.
    pub fn record(&mut self, formula: &Formula<S>)
    where
        S: Display,
    {
        match formula {
            Formula::Equality(l, r) => self.record_equivalence(l, r),
            Formula::IsA(tm, c) => self.record_category(tm, c),
            Formula::Conditional(..) => log::debug!("Nothing to record for {}", formula),
        }
    }

    /// Return true if two terms are equivalent.
    ///
    /// This is the case if the terms are
    /// syntactically equal (modulo parentheses),
    /// connected by a chain of recorded equivalences, or
    /// products with the same coefficient and equivalent factors.
    pub fn are_equivalent(&self, tm1: &Term<S>, tm2: &Term<S>) -> bool {
        self.class(tm1) == self.class(tm2)
    }

    /// Return true if a term, or a term equivalent to it, was recorded to belong to a category.
    pub fn has_category(&self, tm: &Term<S>, category: &CompoundSymbol<S>) -> bool {
        match self.class(tm) {
            Class::Known(root) => self
                .categories
                .get(&root)
                .map_or(false, |cats| cats.contains(category)),
            _ => false,
        }
    }

    /// Return the number literals that a term is equivalent to.
    pub fn numbers(&self, tm: &Term<S>) -> impl Iterator<Item = Number> + '_ {
        let (root, literal) = match self.class(tm) {
            Class::Known(root) => (Some(root), None),
            Class::Number(n) => (None, Some(n)),
            _ => (None, None),
        };
        let members = self.nodes.iter().enumerate();
        let members = members.filter(move |(id, _)| root == Some(self.find(*id)));
        let numbers = members.filter_map(|(_, node)| match node {
            Node::Number(n) => Some(*n),
            _ => None,
        });
        literal.into_iter().chain(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::{format, vec};

    type Tm = Term<&'static str>;

    fn sym(s: &'static str) -> Tm {
        Term::Symbol(s)
    }

    fn int(i: u64) -> Tm {
        Term::Number(Number::Int(i))
    }

    fn twice(tm: Tm) -> Tm {
        Term::product(Number::Int(2), tm)
    }

    fn cat(words: &[&'static str]) -> CompoundSymbol<&'static str> {
        CompoundSymbol(words.to_vec())
    }

    #[test]
    fn transitive() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&sym("x"), &sym("y"));
        kb.record_equivalence(&sym("z"), &sym("y"));
        assert!(kb.are_equivalent(&sym("x"), &sym("z")));
        assert!(kb.are_equivalent(&sym("z"), &sym("x")));
        assert!(!kb.are_equivalent(&sym("x"), &sym("w")));
    }

    #[test]
    fn through_numbers() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&sym("x"), &int(1));
        kb.record_equivalence(&int(1), &sym("y"));
        assert!(kb.are_equivalent(&sym("x"), &sym("y")));
        assert!(!kb.are_equivalent(&sym("x"), &int(2)));
        assert_eq!(kb.numbers(&sym("y")).collect::<Vec<_>>(), vec![Number::Int(1)]);
    }

    #[test]
    fn parentheses() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&Term::parenthesized(sym("x")), &sym("y"));
        assert!(kb.are_equivalent(&sym("x"), &Term::parenthesized(sym("y"))));
        assert!(kb.are_equivalent(&twice(sym("x")), &twice(Term::parenthesized(sym("x")))));
    }

    #[test]
    fn congruence() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&sym("x"), &sym("y"));
        assert!(kb.are_equivalent(&twice(sym("x")), &twice(sym("y"))));
        assert!(!kb.are_equivalent(&twice(sym("x")), &Term::product(Number::Int(3), sym("y"))));

        kb.record_equivalence(&sym("n"), &twice(sym("x")));
        assert!(kb.are_equivalent(&sym("n"), &twice(sym("y"))));
        assert!(!kb.are_equivalent(&sym("n"), &sym("y")));
    }

    #[test]
    fn cyclic() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&sym("x"), &twice(sym("x")));
        kb.record_equivalence(&sym("y"), &twice(sym("y")));
        assert!(!kb.are_equivalent(&sym("x"), &sym("y")));
    }

    #[test]
    fn categories() {
        let mut kb = Knowledge::new();
        kb.record_category(&sym("n"), &cat(&["even", "integer"]));
        assert!(kb.has_category(&sym("n"), &cat(&["even", "integer"])));
        assert!(!kb.has_category(&sym("n"), &cat(&["integer", "even"])));
        assert!(!kb.has_category(&sym("n"), &cat(&["even"])));
        assert!(!kb.has_category(&sym("m"), &cat(&["even", "integer"])));

        // categories follow equivalences, in both directions
        kb.record_equivalence(&sym("m"), &sym("n"));
        kb.record_category(&sym("m"), &cat(&["number"]));
        assert!(kb.has_category(&sym("m"), &cat(&["even", "integer"])));
        assert!(kb.has_category(&sym("n"), &cat(&["number"])));
    }

    #[test]
    fn congruent_category() {
        let mut kb = Knowledge::new();
        kb.record_category(&twice(sym("k")), &cat(&["even"]));
        kb.record_equivalence(&sym("k"), &sym("j"));
        assert!(kb.has_category(&twice(sym("j")), &cat(&["even"])));
    }

    #[test]
    fn cheap_clone() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&sym("x"), &sym("y"));
        let mut kb2 = kb.clone();
        kb2.record_equivalence(&sym("y"), &sym("z"));
        assert!(kb2.are_equivalent(&sym("x"), &sym("z")));
        assert!(!kb.are_equivalent(&sym("x"), &sym("z")));
    }

    /// Record `a{i} = 2 a{i-1} = 3 b{i-1}` and `b{i} = 2 b{i-1} = 3 a{i-1}`.
    fn chains(kb: &mut Knowledge<String>, a: &str, b: &str, n: usize) {
        let s = |v: &str, i: usize| Term::Symbol(format!("{}{}", v, i));
        let mul = |c: u64, tm: Term<String>| Term::product(Number::Int(c), tm);
        for i in 1..=n {
            kb.record_equivalence(&s(a, i), &mul(2, s(a, i - 1)));
            kb.record_equivalence(&s(a, i), &mul(3, s(b, i - 1)));
            kb.record_equivalence(&s(b, i), &mul(2, s(b, i - 1)));
            kb.record_equivalence(&s(b, i), &mul(3, s(a, i - 1)));
        }
    }

    #[test]
    fn nested_congruence() {
        let s = |v: &str, i: usize| Term::Symbol(format!("{}{}", v, i));
        let n = 40;
        let mut kb = Knowledge::new();
        chains(&mut kb, "x", "y", n);
        chains(&mut kb, "z", "w", n);
        assert!(!kb.are_equivalent(&s("x", n), &s("z", n)));

        // propagates through all levels
        kb.record_equivalence(&s("x", 0), &s("z", 0));
        assert!(kb.are_equivalent(&s("x", n), &s("z", n)));
        assert!(kb.are_equivalent(&s("y", n), &s("w", n)));
        assert!(!kb.are_equivalent(&s("x", n), &s("y", n)));
    }

    #[test]
    fn merged_products() {
        let mut kb = Knowledge::new();
        kb.record_equivalence(&sym("a"), &twice(sym("x")));
        kb.record_equivalence(&sym("b"), &twice(sym("y")));
        kb.record_category(&sym("b"), &cat(&["even"]));
        assert!(!kb.are_equivalent(&sym("a"), &sym("b")));

        // `2 x` and `2 y` become equal, and so do `a` and `b`
        kb.record_equivalence(&sym("x"), &sym("y"));
        assert!(kb.are_equivalent(&sym("a"), &sym("b")));
        assert!(kb.has_category(&sym("a"), &cat(&["even"])));
        assert!(kb.are_equivalent(&twice(twice(sym("x"))), &twice(Term::parenthesized(sym("b")))));
    }

    #[test]
    fn queries_without_display() {
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        struct Name(u8);

        let kb: Knowledge<Name> = Knowledge::new();
        assert!(kb.is_empty());
        assert!(kb.are_equivalent(&Term::Symbol(Name(0)), &Term::Symbol(Name(0))));
        assert!(!kb.has_category(&Term::Symbol(Name(0)), &CompoundSymbol::new(Name(1))));
        assert_eq!(kb.numbers(&Term::Number(Number::Int(3))).count(), 1);
    }
}
