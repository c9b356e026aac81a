mod ticket_doc_id_test;
