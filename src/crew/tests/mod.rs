mod crew_tests;
