use wardvoice::domain::TicketDocId;

#[test]
fn generated_ids_stay_in_five_digit_range() {
    for _ in 0..1000 {
        let id = TicketDocId::generate();
        assert!((TicketDocId::MIN..=TicketDocId::MAX).contains(&id.value()));
    }
}

#[test]
fn displays_as_plain_number() {
    for _ in 0..100 {
        assert_eq!(TicketDocId::generate().to_string().len(), 5);
    }
}
