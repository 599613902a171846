//! LinkedQueue behaviour through the `Queue` trait and inherent API.

use super::common::queue_of;
use catena::{ContractViolation, LinkedQueue, Queue};

#[test]
fn test_enqueue_front_dequeue_sizes() {
    let mut queue = LinkedQueue::new();
    queue.enqueue(1).unwrap();
    assert_eq!(queue.len(), 1);
    queue.enqueue(2).unwrap();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.front(), Ok(&2));
}

#[test]
fn test_front_on_empty_queue() {
    let queue: LinkedQueue<i64> = LinkedQueue::new();
    let err = queue.front().unwrap_err();
    assert!(matches!(err, ContractViolation::Precondition { .. }));
    assert_eq!(err.operation(), "LinkedQueue::front");
}

#[test]
fn test_fifo_order_survives_refill() {
    let mut queue = queue_of(&[1, 2]);
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Ok(2));
    assert!(queue.is_empty());
    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn test_generic_queue_usage() {
    fn fill<Q: Queue<i64>>(queue: &mut Q, n: i64) {
        for i in 0..n {
            queue.enqueue(i).unwrap();
        }
    }

    let mut queue = LinkedQueue::new();
    fill(&mut queue, 5);
    assert_eq!(Queue::size(&queue), 5);
    assert_eq!(Queue::front(&queue), Ok(&0));
}

#[test]
fn test_deep_copy_equal_and_independent() {
    let queue = queue_of(&[5, 6, 7]);
    let mut copy = queue.deep_copy();
    assert_eq!(copy, queue);
    copy.dequeue().unwrap();
    assert_eq!(queue.len(), 3);
    assert_eq!(copy.front(), Ok(&6));
}
