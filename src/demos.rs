#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// a thread-safe account/ledger pair, the ledger is one process-wide instance
/// recording every deposit and every successful withdrawal
///# Example#
/// ```
/// use RustedSymDiff::demos::ledger::{Account, TransactionLedger};
/// let ledger = TransactionLedger::instance();
/// let account = Account::new("D9", 100.0);
/// ledger.deposit(&account, 50.0);
/// let ok = ledger.withdraw(&account, 120.0);
/// println!("withdraw ok = {}, balance = {}", ok, account.get_balance());
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod ledger;
///____________________________________________________________________________________________________________________________
/// families of rendering widgets (window, button, shader) produced by
/// interchangeable backend factories
///# Example#
/// ```
/// use RustedSymDiff::demos::render_backends::{RenderBackendType, get_render_factory};
/// let factory = get_render_factory(RenderBackendType::OpenGL);
/// println!("{}", factory.create_window().draw());
/// println!("{}", factory.create_button().draw());
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod render_backends;
///____________________________________________________________________________________________________________________________
/// directed graph with breadth-first and depth-first walks as standard iterators
///# Example#
/// ```
/// use RustedSymDiff::demos::graph_walks::DirectedGraph;
/// let mut g = DirectedGraph::new();
/// g.add_edge(1, 2);
/// g.add_edge(1, 3);
/// g.add_edge(2, 4);
/// let bfs: Vec<usize> = g.bfs(1).collect();
/// assert_eq!(bfs, vec![1, 2, 3, 4]);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod graph_walks;
