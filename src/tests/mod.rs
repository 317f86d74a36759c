mod quiz_session;
