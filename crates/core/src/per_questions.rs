//! PER question texts keyed by `<form code><component><question>` code.
//!
//! Entries are kept in catalog order: area, then component, then question.

pub(crate) static QUESTIONS: &[(&str, &str)] = &[
    ("a1c0q0", "1.1 NS establishes its auxiliary role to the public authorities through a clear mandate and roles set out in applicable legislation policies and plans."),
    ("a1c0q1", "1.2 NS mandate is aligned with RCRC Fundamental Principles."),
    ("a1c0q2", "1.3 NS mandate is reflected in policy strategy plans and procedures. The mandate is disseminated and understood by staff and volunteers."),
    ("a1c0q3", "1.4 NS promotes IHL to the public authorities and uses humanitarian diplomacy to promote compliance."),
    ("a1c0q4", "Component 1 performance"),
    ("a1c1q0", "2.1 NS DRM strategy reflects the NS mandate analysis of country context trends operational objectives success indicators."),
    ("a1c1q1", "2.2 NS DRM strategy is regularly reviewed reflected in response plan and known by staff and volunteers."),
    ("a1c1q2", "2.3 NS DRM strategy includes clear engagement with technical sectors and support services to ensure comprehensive response."),
    ("a1c1q3", "Component 2 performance"),
    ("a1c2q0", "3.1 NS has its own DRM policy or has adopted the IFRC policy."),
    ("a1c2q1", "3.2 DRM policy sets out guiding principles and values that guide decision-making on the response approach and actions."),
    ("a1c2q2", "3.3 DRM policy is inclusive and involves other relevant sectors and services."),
    ("a1c2q3", "3.4 DRM policy is reflected in response plans procedures and it is adhered to by staff and volunteers."),
    ("a1c2q4", "Component 3 performance"),
    ("a1c3q0", "4.1 NS has an IDRL humanitarian diplomacy plan /actions in place based on IFRC's IDRL Checklist."),
    ("a1c3q1", "4.2 NS has identified the relevant legal facilities (i.e. special entitlements and exemptions) in the national legislation."),
    ("a1c3q2", "4.3 NS has staff trained in IDRL & IHL to act as a focal point in an emergency."),
    ("a1c3q3", "4.4 NS is advocating the government to enact legislation in line with the Model Act for the Facilitation and Regulation of International Disaster Relief and Initial Recovery Assistance."),
    ("a1c3q4", "4.5 NS tests and/or tracks IDRL lessons through response operations to guide its future humanitarian diplomacy work."),
    ("a1c3q5", "Component 4 performance"),
    ("a1c4q0", "5.1 NS has mechanisms in place to ensure the affected populations are involved in all stages of the response (including decision making) to ensure assistance is appropriate and meets their needs and priorities."),
    ("a1c4q1", "5.2 NS has trained CEA focal points at key branches and headquarters."),
    ("a1c4q2", "5.3 A NS CEA plan is developed and implemented standard templates are available and procedures are included in SOPs."),
    ("a1c4q3", "5.4 Safe and accessible feedback and complaints mechanisms exists to record refer or respond and monitor communities' concerns and requests regarding the assistance provided or protection issues (including for sexual exploitation and abuse)."),
    ("a1c4q4", "5.5 NS has adopted the Protection for sexual exploitation and abuse policy in line with the International conference resolution on Sexual and Gender Based Violence."),
    ("a1c4q5", "5.6 NS adheres to Sphere and the Core Humanitarian Standards (may consider IASC Guidelines for Integrating gender based violence interventions IASC Guidelines on Including persons with disabilities in humanitarian action) and integrates them into sectorial activities during assessment planning and response."),
    ("a1c4q6", "5.7 NS adheres to protection policies to support their protection services (safe spaces for child protection actions for unaccompanied and separated children prevention of sexual and gender-based violence violence prevention psychosocial support restoring family links accessibility of facilities and information) to respond."),
    ("a1c4q7", "5.8 NS plans and procedures actively minimise potential harmful social economic and environmental impacts of assistance (do no harm principle)."),
    ("a1c4q8", "5.9 NS follows the Minimum Standards for Protection Gender and Inclusion in Emergencies."),
    ("a1c4q9", "Component 5 performance"),
    ("a2c0q0", "6.1 A risk monitoring system (including a focal point) is formally established and linked to preparedness and early action."),
    ("a2c0q1", "6.2 NS has the capacity to collect and analyse primary and secondary data (including sectorial specific information) on emerging political social and economic trends that could influence humanitarian action."),
    ("a2c0q2", "6.3 The current/likely gaps barriers risks and challenges to NS acceptance security and access have been identified."),
    ("a2c0q3", "6.4 Early warning system is established and includes thresholds (including for slow on-set disasters) and required mechanisms to communicate and activate early action."),
    ("a2c0q4", "6.5 Updated national multi-hazard risk analysis and maps (including changing risks patterns) are shared with all branches at least once every 2 years."),
    ("a2c0q5", "6.6 Communities and local volunteers contribute to the regular update of the multi-hazard risk mapping and Vulnerability and capacity assessments (VCA)."),
    ("a2c0q6", "6.7 Risk assessments at community level include the analysis of the potential connectors and dividers within a community."),
    ("a2c0q7", "6.8 For at-risk areas primary and secondary data on vulnerabilities and capacities of communities is broken down by age gender disability income and other context-specific diversity and cultural factors and include potential protection-related consequences on affected populations."),
    ("a2c0q8", "6.9 For cross-border high risk areas NSs coordinate risk monitoring are familiar with each other's capacities and procedures and have a mechanism in place to share information."),
    ("a2c0q9", "Component 6 performance"),
    ("a2c1q0", "7.1 Analysis of scenarios is multi-sectorial (e.g. health livelihood protection) and includes identification of drivers (root causes of risks) and assumptions to inform potential impact."),
    ("a2c1q1", "7.2 NS has developed humanitarian scenarios for each high-risk area in the country and contingency plans are aligned with those of the public authorities."),
    ("a2c1q2", "7.3 A response strategy is available for each scenario and branches are involved in development of the response strategy affecting their area."),
    ("a2c1q3", "7.4 Scenarios include the identification of challenges to NS acceptance security and access during humanitarian operations."),
    ("a2c1q4", "7.5 Contingency plans include triggers to activate the plan especially for protracted and slow onset crises."),
    ("a2c1q5", "7.6 Contingency plans for potential regional crises include coordination mechanisms between neighbouring countries particularly for potential epidemic and pandemic crises."),
    ("a2c1q6", "7.7 Contingency plans for high risks are developed and reviewed on an annual basis."),
    ("a2c1q7", "Component 7 performance"),
    ("a2c2q0", "8.1 Responsibility for risk management is assigned to a trained staff within the NS and overall accountability for risk management is identified."),
    ("a2c2q1", "8.2 NS systematically identifies evaluates and mitigates any potential operational and reputational risks including risks of responding in insecure contexts."),
    ("a2c2q2", "8.3 Risk management is done holistically across technical sectors with mitigation measures identified and operationalised."),
    ("a2c2q3", "8.4 NS identifies key stakeholders and develops engagement strategies to increase acceptance by them."),
    ("a2c2q4", "8.5 Systems and procedures are in place to prevent fraud and corruption and reinforce acceptance security and access."),
    ("a2c2q5", "8.6 Reputational and integrity risk management is a standing item on the NS's Governing Board meetings."),
    ("a2c2q6", "8.7 NS has a crisis management unit/function to manage critical incidents."),
    ("a2c2q7", "Component 8 performance"),
    ("a2c3q0", "9.1 NS has a nominated trained focal point for disaster preparedness."),
    ("a2c3q1", "9.2 Preparedness gaps are identified based on risk analysis and response strategy and take into account the strengthening of support units."),
    ("a2c3q2", "9.3 Remedial actions for preparedness gaps are being implemented."),
    ("a2c3q3", "9.4 Financial gaps for preparedness and early actions are identified and resource mobilisation strategy is in place."),
    ("a2c3q4", "9.5 Preparedness actions are updated at least every two years and revised every six months or after every major disaster."),
    ("a2c3q5", "9.6 Policies and procedures exist to allocate emergency or development budgets for preparedness capacity strengthening."),
    ("a2c3q6", "Component 9 performance"),
    ("a2c4q0", "10.1 NS has an up-to-date approved business continuity plan for major emergency/crisis situation that would affect its ability to operate."),
    ("a2c4q1", "10.2 NS has an up-to-date approved procedure in place to communicate with donors to repurpose funds for unexpected or emerging needs."),
    ("a2c4q2", "Component 10 performance"),
    ("a2c5q0", "11.1 NS has up-to-date approved SOPs for all specific areas of intervention and support services to respond to disasters and crises."),
    ("a2c5q1", "11.2 SOPs have been disseminated to well-known and followed by staff and volunteers."),
    ("a2c5q2", "11.3 SOPs describe the roles and responsibilities of responders at strategic management and operational levels at HQ branches and communities."),
    ("a2c5q3", "11.4 SOPs incorporate procedures for all phases of response (early warning early action emergency assessment response planning etc.) including standardised templates."),
    ("a2c5q4", "11.5 SOPs include procedures to scale alert levels up and down."),
    ("a2c5q5", "11.6 Up-to-date and approved SOPs to respond to disasters and crises exist at branch level."),
    ("a2c5q6", "11.7 SOPs include a decision making flowchart which assigns decision making responsibility accordingly at each level."),
    ("a2c5q7", "11.8 SOPs include an up-to-date organogram with contact details."),
    ("a2c5q8", "Component 11 performance"),
    ("a2c6q0", "12.1 NS has an up-to-date approved multi-sectorial response plan for rapid deployment and efficient use of human and material resources."),
    ("a2c6q1", "12.2 The plan takes into consideration gender age disability and diversity complexities and community capacities."),
    ("a2c6q2", "12.3 The plan is developed by the NS with the participation of community staff volunteers governance management and technical inputs from IFRC where relevant."),
    ("a2c6q3", "12.4 The plan adheres to the Principles and Rules DRM policy and Fundamental principles."),
    ("a2c6q4", "12.5 The plan aligns with IFRC global standards and templates (EPOA)."),
    ("a2c6q5", "12.6 The plan considers how to reduce and address secondary risks and is in line with the medium to longer term interventions focused on recovery."),
    ("a2c6q6", "12.7 The plan acknowledges response and recovery actions of other actors and is disseminated to the Movement and other relevant external actors."),
    ("a2c6q7", "12.8 NS has a process to adapt the plan to changing context and emergency needs."),
    ("a2c6q8", "12.9 NS can manage the transition from relief phase and use of short-term resources and volunteers to medium-term recovery interventions."),
    ("a2c6q9", "12.10 The plan is updated with lessons learned from real time and simulated exercises."),
    ("a2c6q10", "12.11 NS can manage the transition from relief phase and use of short-term resources and volunteers to medium-term recovery interventions."),
    ("a2c6q11", "12.12 NS has a process to develop and approve donation protocols that communicate priority needs to the public in times of disaster and crisis."),
    ("a2c6q12", "Component 12 performance"),
    ("a2c7q0", "13.1 Pre-disaster meetings with key stakeholders take place (at least once a year)."),
    ("a2c7q1", "13.2 Key staff are familiar with pre-disaster/crisis agreements and how to operationalize them in a response."),
    ("a2c7q2", "13.3 Coordination and management arrangements with relevant local and national key actors are formalized (NGO INGO UN public authorities)."),
    ("a2c7q3", "13.4 NS has an up-to-date capacity mapping of Movement partners."),
    ("a2c7q4", "13.5 Movement coordination agreements are known and available within NS and shared with IFRC."),
    ("a2c7q5", "13.6 All contractors have signed the Code of Conduct."),
    ("a2c7q6", "13.7 All pre-disaster agreements are in line with NS policies and procedures including Principles and Rules Strengthening Movement Coordination and Cooperation (SMCC) and in line with Quality and Accountability standards."),
    ("a2c7q7", "13.8 Agreements exist with public authorities to facilitate expedited import of humanitarian aid and visas for incoming personnel."),
    ("a2c7q8", "13.9 Agreements with key suppliers of goods and services are formalized and agreed with an agreed mechanism for activation."),
    ("a2c7q9", "13.10 Agreements with money transfer providers are formalised with an agreed mechanism for activation."),
    ("a2c7q10", "13.11 Agreements with existing Social Protection systems are in place to facilitate access to pre-existing databases of vulnerable populations."),
    ("a2c7q11", "Component 13 performance"),
    ("a3c0q0", "15.1 A focal point is identified and available for each NS specific area of intervention and services to provide technical guidance and support."),
    ("a3c0q1", "15.2 Staff and volunteers are trained and kept up to date in the specific areas of intervention and services."),
    ("a3c0q2", "15.3 Response materials and equipment database is up to date and gaps are noted and being addressed."),
    ("a3c0q3", "15.4 Resources (HR and equipment) are available and sufficient to cover the initial response needs."),
    ("a3c0q4", "15.5 Capacities are mapped in line with the different levels of response (Green - Yellow - Red)."),
    ("a3c0q5", "15.6 Mechanisms are in place to share resources amongst branches/regions and with sister NSs."),
    ("a3c0q6", "Component 15 performance"),
    ("a3c1q0", "16.1 NS's early warning early action system - inclusive of Forecast-based Financing and disease surveillance - is an integral and accepted part of the national Early Warning Early Action strategies and preparedness system."),
    ("a3c1q1", "16.2 NS has a clear methodology to decide when and where early action should be taken based on a combination of vulnerability exposure and triggers."),
    ("a3c1q2", "16.3 NS has mechanisms to anticipate and respond to major hazards in coordination with the national system."),
    ("a3c1q3", "16.4 NS tests and makes use of new technologies appropriate for the context and audiences for sending alert messages related to early action (e."),
    ("a3c1q4", "16.5 NS has procedures and personnel permanently available to communicate alerts and initiate early action to all levels of the N"),
    ("a3c1q5", "16.6 Branches have functioning local networks to inform communities of potential threats and activate early action (respecting mandates of public authorities)."),
    ("a3c1q6", "Component 16 performance"),
    ("a3c2q0", "17.1 NS has a CBI preparedness plan properly budgeted and resourced with clear activities and outputs based on analysis and discussion with key stakeholders."),
    ("a3c2q1", "17.2 CBI preparedness plan is tailored to address NS opportunities and barriers to be ready to provide scalable emergency CBI."),
    ("a3c2q2", "17.3 NS has an up-to-date database of CBI trained and experienced staff and volunteers at headquarter and branch levels across sectors and support services to implement CBI within the response cycle."),
    ("a3c2q3", "17.4 NS has pre-disaster feasibility cash analysis and baseline about market systems prices and seasonality mapping of other actors and coordination structures."),
    ("a3c2q4", "17.5 NS has regularly revised CBI SOPs with clear roles and responsibilities outlined at each stage of the response process based on lessons learned from previous responses."),
    ("a3c2q5", "17.6 NS has mapped CBI delivery mechanisms service providers and has in place agreements including activation mechanism with money transfer providers."),
    ("a3c2q6", "17.7 NS has an up-to-date approved CBI toolkit that adapts CiE tools to the NS specific contexts."),
    ("a3c2q7", "17.8 NS routinely uses the CBI toolkit which is revised and updated based on feedback from preparedness and response actions."),
    ("a3c2q8", "17.9 NS leads CBI coordination mechanism both internally within the Movement and externally with other CBI actors in the country (public authorities UN NGOs etc...)."),
    ("a3c2q9", "Component 17 performance"),
    ("a3c3q0", "18.1 NS has standardised templates used for primary and secondary data collection and reporting."),
    ("a3c3q1", "18.2 NS has a trained multi-sectorial emergency assessment team available to deploy in a timely manner."),
    ("a3c3q2", "18.3 NS emergency plans of actions are based on emergency needs assessment results."),
    ("a3c3q3", "18.4 Information is disaggregated according to gender age groups and others."),
    ("a3c3q4", "18.5 Emergency needs assessment analyses accessibility availability quality use and awareness of goods and services."),
    ("a3c3q5", "18.6 Emergency needs assessment takes into consideration existing capacities and analyses the national and international capacities responses and gaps."),
    ("a3c3q6", "18.7 Emergency needs assessment should analyse secondary risk specific needs/concerns of vulnerable people/coping mechanisms/early and self-recovery."),
    ("a3c3q7", "Component 18 performance"),
    ("a3c4q0", "19.1 NS communicates selection criteria to the affected population using preferred communication channels and involves community leaders/representatives."),
    ("a3c4q1", "19.2 NS identifies appropriate selection criteria based on existing vulnerability and taking into consideration gender diversity age and disabilities."),
    ("a3c4q2", "19.3 NS protects data collected from affected population."),
    ("a3c4q3", "19.4 Responders have been trained in data collection including the standardised templates."),
    ("a3c4q4", "19.5 NS cross-checks affected populations' lists with community leaders other agencies authority etc… to verify inclusion/exclusion issues (considering protection of sensitive data)."),
    ("a3c4q5", "Component 19 performance"),
    ("a3c5q0", "20.1 NS has a formally appointed focal point for EOC."),
    ("a3c5q1", "20.2 NS has up-to-date EOC SOPs which are consistent with other NS documents including sectors and support services."),
    ("a3c5q2", "20.3 EOC is activated according to defined response levels and activation is communicated."),
    ("a3c5q3", "20.4 Relevant staff and volunteers know their roles and responsibilities and are trained on SOPs."),
    ("a3c5q4", "20.5 All technical sectors and support services have procedures that integrate with the EOC SOPs."),
    ("a3c5q5", "20.6 EOC has intended space with sufficient equipment to manage information and coordination that does not affect other NS activities."),
    ("a3c5q6", "20.7 EOC facilities are self-sufficient with at least power water and telecommunications with functioning back-up means."),
    ("a3c5q7", "20.8 NS has an alternative location if the EOC space is not accessible."),
    ("a3c5q8", "20.9 NS has full and updated contact details for relevant personnel."),
    ("a3c5q9", "20.10 NS has legal access and use of designated emergency frequencies which link with other stakeholders in response."),
    ("a3c5q10", "20.11 EOC staff manages and displays regular updated information (maps operational details etc...)."),
    ("a3c5q11", "20.12 Strategic decisions are made based on the situational analysis to address operational gaps and needs."),
    ("a3c5q12", "20.13 Clear levels of authority exist between the strategic and management levels of the EOC."),
    ("a3c5q13", "20.14 EOC is operational 24/7 however operational period of staff does not exceed 12 hrs/shift."),
    ("a3c5q14", "20.15 Information is collected validated and analyzed to provide updated standardized situation reports."),
    ("a3c5q15", "Component 20 performance"),
    ("a3c6q0", "21.1 Key staff at headquarters and branch level are familiar with IM templates (from NS or IFRC) methodology and procedures."),
    ("a3c6q1", "21.2 NS has access to equipment to compile visualise and share information (e.g. printers cartridges scanners and battery powered projectors)."),
    ("a3c6q2", "21.3 NS has a system to store and share files with emergency personnel."),
    ("a3c6q3", "21.4 NS has access to updated data on high-risk areas (demographic socio-economic) disaggregated by age gender and disability."),
    ("a3c6q4", "21.5 Information and specifically decisions are documented and filed."),
    ("a3c6q5", "21.6 NS has a standardised Situation Report format that includes information on situation NS response other actors' response challenges achievements and gaps."),
    ("a3c6q6", "21.7 The Situation Reports are analysed to adapt response plans."),
    ("a3c6q7", "21.8 NS has mechanisms to share information across levels sectors and support services."),
    ("a3c6q8", "Component 21 performance"),
    ("a3c7q0", "22.1 NS regularly tests its early action and response system through simulation and drills."),
    ("a3c7q1", "22.2 Lessons drawn from drills simulations and responses inform revisions in the emergency procedures."),
    ("a3c7q2", "22.3 NS includes access acceptance security and the practical application of the Fundamental Principles in their simulations and drills."),
    ("a3c7q3", "22.4 Branches in high-risk areas test their response system including early action through drills and simulations."),
    ("a3c7q4", "22.5 Testing includes issues of safe access (access perception acceptance and security)."),
    ("a3c7q5", "22.6 NS conducts cross-border simulations in relevant contexts."),
    ("a3c7q6", "22.7 Simulations and drills are conducted with national authorities and other organisations."),
    ("a3c7q7", "Component 22 performance"),
    ("a3c8q0", "23.1 Key staff are familiar with the available IFRC/ICRC support (technical financial material and HR)."),
    ("a3c8q1", "23.2 SOPs and contacts to coordinate response with respective IFRC offices are available."),
    ("a3c8q2", "23.3 NS SOPs include procedures to request and incorporate regional and global support/teams into their response system including prior to imminent crisis/disaster."),
    ("a3c8q3", "23.4 NS informs IFRC within 24 hours for which assistance may be required ."),
    ("a3c8q4", "23.5 NS is familiar with the IFRC emergency funding mechanisms (Emergency Appeals DREF and Forecast-based Financing by DREF) their procedures and required supporting documents (EPoA)."),
    ("a3c8q5", "23.6 NS request bilateral assistance in accordance with established coordination frameworks."),
    ("a3c8q6", "23.7 NS has an assigned focal point to act as counterpart to regional/international responders."),
    ("a3c8q7", "Component 23 performance"),
    ("a3-2c1q0", "14.1 NS ensures the active participation and reflects community needs and strengths of the local population (including marginalized and excluded groups) in the assessment design planning of community-based preparedness activities."),
    ("a3-2c1q1", "14.2 NS conducts regular awareness raising and public education on disaster/crises."),
    ("a3-2c1q2", "14.3 Community based early warning and early action is in place and linked to the local early warning systems."),
    ("a3-2c1q3", "14.4 CDRTs are trained and equipped to handle local response in partnership with relevant local actors."),
    ("a3-2c1q4", "14.5 CDRTs have an up-to-date response and contingency plan aligned with relevant local plans and resources."),
    ("a3-2c1q5", "14.6 NS ensures community assessment planning and response is done in an inclusive gender and diversity and conflict sensitive way."),
    ("a3-2c1q6", "Component 14A performance"),
    ("a3-2c2q0", "14.7 Evacuation is part of NS's response strategy and is identified in different scenarios."),
    ("a3-2c2q1", "14.8 NS is part of the mechanism for the evacuation of communities in high-risk areas."),
    ("a3-2c2q2", "Component 14B performance"),
    ("a3-2c3q0", "14.9 Multi-sectoral response needs are identified for different epidemic scenarios including multi-country outbreaks."),
    ("a3-2c3q1", "14.10 NS has procedures data collection and feedback mechanisms in place to ensure community engagement in prevention and response interventions."),
    ("a3-2c3q2", "14.11 NS has a procedure in place to manage and respond to rumours."),
    ("a3-2c3q3", "14.12 NS has safety protocols in place for paid staff and volunteers for infection prevention and control within epidemics."),
    ("a3-2c3q4", "14.13 NS is part of the public authorities' safe and dignified management of dead bodies and identification system in infectious disease outbreaks."),
    ("a3-2c3q5", "14.14 NS has appropriate personal protection equipment in place with regularly trained staff and volunteers on handling using and disposing this equipment."),
    ("a3-2c3q6", "14.15 NS has clearly identified their role within epidemics and have established relevant technical support to ensure best practice."),
    ("a3-2c3q7", "14.16 NS has clearly identified their role in the case of isolation and quarantine being declared and have established relevant technical support to ensure best practice."),
    ("a3-2c3q8", "Component 14C performance"),
    ("a3-2c4q0", "14.17 First Aid is part of NS's response strategy and is identified in different scenarios."),
    ("a3-2c4q1", "14.18 NS includes First Aid training as part of its CBDRR strategy."),
    ("a3-2c4q2", "14.19 NS has trained and equipped teams of First Aid volunteers for quick and effective response."),
    ("a3-2c4q3", "Component 14D performance"),
    ("a3-2c5q0", "14.20 Water and sanitation humanitarian consequences are part of the NS's response strategy and identified in different scenarios."),
    ("a3-2c5q1", "14.21 NS response teams (national and branch) have the appropriate WASH training skills and equipment."),
    ("a3-2c5q2", "14.22 NS has the required equipment to provide quality WASH services or clear SOPs on how to obtain this equipment (in-country or via IFRC)."),
    ("a3-2c5q3", "14.23 WASH technical support in emergencies is available in the NS through RCRC Movement partners or agreed with relevant WASH authorities/ partners."),
    ("a3-2c5q4", "14.24 NS is engaged and coordinates with other organizations and networks active in WASH in the country."),
    ("a3-2c5q5", "Component 14E performance"),
    ("a3-2c6q0", "14.25 NS monitors analyses and documents food security levels in the country food-security status of the population/most vulnerable agro-meteorological data supplies and demand in main food and agricultural markets food reserves."),
    ("a3-2c6q1", "14.26 NS has technical staff for food assistance trained to assess needs and make recommendations on assistance needed transfer modality (cash food vouchers) and delivery mechanism according to markets’ conditions."),
    ("a3-2c6q2", "14.27 NS is engaged and coordinated with other organizations and networks (clusters) active in food aid distribution (WFP ICRC…)."),
    ("a3-2c6q3", "14.28 NS has integrated food distribution in its response strategies (main risks scenarios response capacity) and adheres to policy and safety standards for food and milk distribution."),
    ("a3-2c6q4", "14.29 NS has a specific action plan to procure and distribute food aid at scale including assessment forms SOPs for Affected population identification and selection food ration calculation (based on food access and availability at the household level) different types of food distribution system set up of distribution site."),
    ("a3-2c6q5", "Component 14F performance"),
    ("a3-2c7q0", "14.30 Livelihoods is incorporated into NS DM/DP strategy plans systems and procedures."),
    ("a3-2c7q1", "14.31 NS has identified national policies related to safety nets employment and livelihood/economic/resilience development plans."),
    ("a3-2c7q2", "14.32 NS has identified a Livelihood household/FS focal point and other technical staff (emergency response teams) for livelihoods preparedness who are trained on assessment market analysis etc."),
    ("a3-2c7q3", "14.33 NS has identified and documented main livelihoods zones and systems (agricultural and non-agricultural) and main market systems (food and household livelihood) in disaster-prone areas which are used to develop and update a market baseline."),
    ("a3-2c7q4", "14.34 NS has identified risks to community and household productive assets in disaster-prone areas and has plans for protection in place."),
    ("a3-2c7q5", "14.35 NS emergency tools are contextualised and include livelihoods."),
    ("a3-2c7q6", "14.36 NS is engaged and coordinated with other organizations and networks active in livelihoods in the country."),
    ("a3-2c7q7", "14.37 NS staff and volunteers are trained in data collection (for baseline and progress/indicators measurement)."),
    ("a3-2c7q8", "Component 14G performance"),
    ("a3-2c8q0", "14.38 Search and rescue is part of the NS's response strategy and is identified in different scenarios."),
    ("a3-2c8q1", "Component 14H performance"),
    ("a3-2c9q0", "14.39 NS has mechanisms for consultation with target population on the most appropriate shelter response solutions."),
    ("a3-2c9q1", "14.40 Based on the scenario agreed with the public authorities shelter supplies are pre-positioned in high-risk areas."),
    ("a3-2c9q2", "14.41 NS has an agreed standard NFI kit with items prepositioned and clear SOPs on how to obtain them (in-country or via IFRC)."),
    ("a3-2c9q3", "14.42 NS has identified suppliers of shelter items and NFIs with pre-disaster and framework agreements in place."),
    ("a3-2c9q4", "14.43 NS has standard emergency and temporary shelter designs following consultation with at risk population and based on available materials and common techniques."),
    ("a3-2c9q5", "14.44 NS volunteers are trained in the use of the prepositioned shelter materials to construct basic shelters (e.g. shelter kit training)."),
    ("a3-2c9q6", "Component 14I performance"),
    ("a3-2c10q0", "14.45 NS is part of the public authorities' management of dead bodies and identification system."),
    ("a3-2c10q1", "14.46 Management of dead bodies and identification needs are part of the NS's response strategy and identified in different scenarios."),
    ("a3-2c10q2", "Component 14J performance"),
    ("a3-2c11q0", "14.47 Staff and volunteers are able to provide quality RFL services."),
    ("a3-2c11q1", "14.48 Procedures and agreements with ICRC on RFL are in place."),
    ("a3-2c11q2", "Component 14K performance"),
    ("a3-2c12q0", "14.49 Key staff are familiar with key recovery principles such as detailed assessment community participation consideration of cross-cutting issues and strengthening resilience through the response."),
    ("a3-2c12q1", "14.50 The NS mandate for recovery is formally agreed with the public authorities."),
    ("a3-2c12q2", "14.51 NS has set up enabling systems which smoothen the transition from relief to longer-term recovery activities including human resources and support services as well as planning for early recovery interventions."),
    ("a3-2c12q3", "14.52 NS coordinates with public authorities and humanitarian actors participating in joint needs assessment and the national recovery and reconstruction planning."),
    ("a3-2c12q4", "14.53 NS volunteers are trained in the use of the prepositioned shelter materials to construct basic shelters (e.g. shelter kit training)."),
    ("a3-2c12q5", "14.54 NS has considered the possibility of external partnerships to meet recovery needs especially in sectors which are not considered strategic."),
    ("a3-2c12q6", "Component 14L performance"),
    ("a3-2c13q0", "14.55 NS has a defined role and allied responsibilities in national regional and local authorities' emergency plans related to CBRN hazards."),
    ("a3-2c13q1", "14.56 NS has an action plan to respond to a technological and biological incident based on its agreed role."),
    ("a3-2c13q2", "14.57 NS has SOPs including safety protocols for CBRN related operations."),
    ("a3-2c13q3", "14.58 NS has a dedicated focal point for CBRN."),
    ("a3-2c13q4", "14.59 NS has according to its mandate specifically trained staff and volunteers able to effectively operate in CBRN preparedness and response environments."),
    ("a3-2c13q5", "14.60 NS has appropriate CBRN personal protection equipment in place and regularly trains staff and volunteers on handling and using this equipment."),
    ("a3-2c13q6", "14.61 NS has built up a network of expertise with relevant organizations and key experts to receive specialized support for CBRN-related hazards."),
    ("a3-2c13q7", "14.62 NS in line with its mandate has readily available public key messages for CBRN emergencies that have been vetted by the relevant civil authorities."),
    ("a3-2c13q8", "14.63 NS has engaged with neighboring National Societies in planning for and responding to the cross-border effects of CBRN hazards."),
    ("a3-2c13q9", "14.64 The NS is participating in relevant CBRN-related forums (national/regional) for preparedness and response and has the mechanisms for real-time information sharing."),
    ("a3-2c13q10", "14.65 The NS has identified the need for international assistance for CBRN events (if applicable) and has shared this with Movement partners."),
    ("a3-2c13q11", "Component 14M performance"),
    ("a3-2c14q0", "14.66 Community health volunteers discuss and develop health contingency plans with their communities and conduct community health and safety assessments once a year."),
    ("a3-2c14q1", "14.67 Every volunteer in every sector is initially trained in Basic First Aid and receives refresher training each year."),
    ("a3-2c14q2", "14.68 CBHFA volunteer training includes a session on proper reporting of suspect health events to branch staff and/or the Ministry of Health"),
    ("a3-2c14q3", "14.69 CBHFA volunteers are actively engaged in simulation planning implementation and evaluation to ensure community awareness and involvement and that information and referral linkages with health facilities are maintained."),
    ("a3-2c14q4", "Component 14N performance"),
    ("a4c0q0", "24.1 All coordination and cooperation adheres to SMCC principles."),
    ("a4c0q1", "24.2 In country coordination mechanisms are established with Movement partners to share information on needs assessment plan of actions progress against operations and emerging gaps in resources and operational capacities."),
    ("a4c0q2", "24.3 NS exchanges information with neighboring NS and coordinates its response activities with them."),
    ("a4c0q3", "24.4 When international assistance is accepted the NS establishes a framework to receive coordinate account and report on its use in collaboration with IFRC."),
    ("a4c0q4", "Component 24 performance"),
    ("a4c1q0", "25.1 NS is formally part of the national humanitarian coordination system participates regularly and informs partners on RCRC Movement capacities in case international support is required."),
    ("a4c1q1", "25.2 NS knows the national authorities' capacities and identifies areas within a response to fulfill their auxiliary role."),
    ("a4c1q2", "25.3 NS maintains control over assets resources and use of emblem when working with public authorities and ensures independence."),
    ("a4c1q3", "25.4 Each NS area of intervention has an established coordination mechanism with local and national authorities."),
    ("a4c1q4", "Component 25 performance"),
    ("a4c2q0", "26.1 NS is an active member of the humanitarian community (UN NGO) for coordination and efficiency of response."),
    ("a4c2q1", "26.2 The role of the NS as a cluster member is formally agreed and NS provides information to the humanitarian coordination system."),
    ("a4c2q2", "26.3 NS is aware of IFRC's role in the shelter cluster coordination."),
    ("a4c2q3", "26.4 NS is aware of UN-led appeal and strategic processes."),
    ("a4c2q4", "26.5 Partnership agreements with key emergency response UN/NGO partners in country are formalized and shared between branches and headquarters."),
    ("a4c2q5", "Component 26 performance"),
    ("a4c3q0", "27.1 Coordination arrangements exist with military and adhere to Fundamental Principles International humanitarian law (IHL) Council of Delegates (CoD) resolutions."),
    ("a4c3q1", "27.2 NS applies the Movement guidance document on the Movement and military bodies (2005)."),
    ("a4c3q2", "27.3 NS only uses military assets as a last resort in coordination with local authorities and informing IFRC."),
    ("a4c3q3", "27.4 NS considers potential impact on security of affected population when coordinating with military forces and does not use armed protection or armed military transport."),
    ("a4c3q4", "27.5 NS promotes Fundamental Principles and appropriate use of the Movement emblems."),
    ("a4c3q5", "Component 27 performance"),
    ("a4c4q0", "28.1 NS has procedures to manage information between community to branches and branch to headquarters and vice versa."),
    ("a4c4q1", "28.2 Information from communities is taken into consideration for decision-making at branches and shared with headquarters."),
    ("a4c4q2", "28.3 Branches have system to communicate and coordinate with CDRTs."),
    ("a4c4q3", "28.4 NS supports community level response systems (either within the NS or in coordination with local authorities)."),
    ("a4c4q4", "Component 28 performance"),
    ("a4c5q0", "29.1 NS ensures due diligence when selecting partners and accepting donations to mitigate image or reputational risks."),
    ("a4c5q1", "29.2 NS ensures appropriate use of emblem and protect the organization's visual identity."),
    ("a4c5q2", "29.3 NS has mechanisms in place to train and use volunteers from corporate partners."),
    ("a4c5q3", "Component 29 performance"),
    ("a5c0q0", "30.1 NS implements Safer Access and has appropriate security systems in place to protect staff and volunteers."),
    ("a5c0q1", "30.2 Trained staff at headquarter and branch are appointed and accountable for safety and security."),
    ("a5c0q2", "30.3 Context and risk analysis information is provided to responders on an ongoing basis."),
    ("a5c0q3", "30.4 A safety and security policy and a compliance system exist to monitor staff and volunteers."),
    ("a5c0q4", "30.5 Responders have been trained in Safer Access Stay Safe and managers have completed security management training."),
    ("a5c0q5", "30.6 All staff and volunteers know the NS safety and security rules and procedures and follow them."),
    ("a5c0q6", "30.7 NS has communication mechanisms for staff and volunteers to report safety and security risks and incidents."),
    ("a5c0q7", "Component 30 performance"),
    ("a5c1q0", "31.1 NS has a dedicated PMER function for emergency operations with adequate human and financial resources."),
    ("a5c1q1", "31.2 NS refers to and uses lessons from previous operations in response planning (e.g. from evaluation review and operational reports)."),
    ("a5c1q2", "31.3 NS has a standardised framework or plan of action for emergency operations which identifies specific results and the indicators to measure them."),
    ("a5c1q3", "31.4 NS operates a M&E system at the field level to collect manage and report on data to branch country and IFRC offices against the set objectives of the operation."),
    ("a5c1q4", "31.5 Operational plans are revised and updated based on intended and unintended outcomes of operations."),
    ("a5c1q5", "31.6 NS allocates resources to conduct evaluations and/or reviews of the operation to identify and integrate key lessons and recommendations."),
    ("a5c1q6", "31.7 NS reports in a timely manner using appropriate reporting templates/formats according to agreements with partners."),
    ("a5c1q7", "31.8 NS effectively leads or cooperates with the IFRC and ICRC on relevant PMER processes especially the compilation and sharing of Movement-wide contributions to the operation."),
    ("a5c1q8", "Component 31 performance"),
    ("a5c2q0", "32.1 NS has an automated accounting and financial system and procedures to account for and report regularly on funds expenditures and any in-kind resources received."),
    ("a5c2q1", "32.2 NS has trained personnel in Finance and Admin emergency support procedures."),
    ("a5c2q2", "32.3 NS has approved adapted Finance and Admin emergency procedures that comply with national laws and IFRC practices to rapidly support operations."),
    ("a5c2q3", "32.4 The activation of Finance and Admin emergency procedures is linked to the EOC SOPs."),
    ("a5c2q4", "32.5 NS has procedures in place to facilitate transparency."),
    ("a5c2q5", "32.6 NS has in place systems and procedures for control and oversight to prevent acts of fraud and/or corruption during an emergency."),
    ("a5c2q6", "32.7 Relevant admin finance staff and operation managers are familiar with existing emergency related MoUs or agreements for compliance."),
    ("a5c2q7", "Component 32 performance"),
    ("a5c3q0", "33.1 All key staff are equipped with functioning mobile phones SIM cards/load cards are readily available and a system to ensure recharging is in place while in the field."),
    ("a5c3q1", "33.2 NS key personnel carry contact lists at all times with critical numbers saved as standard on all mobile phones."),
    ("a5c3q2", "33.3 NS has an up-to-date approved Emergency Notification Protocol / SOPs followed by all staff and volunteers."),
    ("a5c3q3", "33.4 NS has an agreed social media platform (i.e. WhatsApp Viber Line Facebook etc.) for emergency communications and messaging."),
    ("a5c3q4", "33.5 Key headquarter and branch staff in high-risk areas have a functioning radio system (two-way VHF and HF)."),
    ("a5c3q5", "33.6 Handheld radios are assigned to key staff and NS vehicles are equipped with radios."),
    ("a5c3q6", "33.7 Frequencies for emergency radio transmission are officially cleared with national authorities."),
    ("a5c3q7", "33.8 All personnel have received radio training and call signs are assigned accordingly."),
    ("a5c3q8", "33.9 NS has up-to-date approved SOPs for mobile and radio communications."),
    ("a5c3q9", "33.10 NS has assigned satellite phones to key staff (according to context needs) and any country restrictions are known and adhered to."),
    ("a5c3q10", "33.11 NS has portable generators to ensure continuity of operations at key HQ and branch locations."),
    ("a5c3q11", "33.12 NS has an internet capable router to provide data connectivity for operational staff and pocket WiFi devices are available for field personnel."),
    ("a5c3q12", "33.13 NS has trained IT support focal points able to support technical issues and equipment (e.g. computers software phones cameras GPS) and provide maintenance."),
    ("a5c3q13", "Component 33 performance"),
    ("a5c5q0", "34.1 NS has a dedicated function/unit to carry out and coordinate all logistics activities i.e. procurement stock management and warehousing transport and fleet."),
    ("a5c5q1", "34.2 All staff involved in logistics have a clearly defined role in their job descriptions and have received training to carry out their tasks."),
    ("a5c5q2", "34.3 Key staff are familiar with IFRC logistics services to support National Society emergency operations."),
    ("a5c5q3", "34.4 NS has analysed optimal supply chain options (e.g. prepositioned relief items pre-existing agreements with suppliers environmental impact) in terms of cost speed and reliability."),
    ("a5c5q4", "34.5 Pre-positioned relief items meet standards and reflect at risk/affected populations needs."),
    ("a5c5q5", "34.6 Pre-positioned relief items are strategically located in the high risk areas."),
    ("a5c5q6", "34.7 NS has volunteers trained in logistics who can act as surge capacity during an emergency response."),
    ("a5c6q0", "34.8 NS is aware of the existence of any status agreement IFRC has signed with the government and the implications of that agreement on any import duty and tax exemptions."),
    ("a5c6q1", "34.9 NS coordinates their stock and equipment with other key stakeholders in country and adheres to Movement standards (Emergency Items Catalogue)."),
    ("a5c6q2", "34.10 A documented expedited procedure exists for branches to request additional relief items and/or equipment for early action and immediate response."),
    ("a5c6q3", "34.11 NS has SOPs for accepting (or rejecting) storing disposing and reporting on in-kind donations."),
    ("a5c6q4", "34.12 NS has a procedure on the import of goods (regulations to comply forms to be completed requirement of import licensed agents etc.) including import tax/duties exemptions."),
    ("a5c7q0", "34.13 NS has trained personnel for procurement."),
    ("a5c7q1", "34.14 NS has a documented and approved emergency procurement procedure including authorisation levels standard forms templates and relevant staff are familiar with the procedure."),
    ("a5c7q2", "34.15 NS has an up-to-date database of suppliers (who are in compliance with IFRC Code of Conduct) for key items and services."),
    ("a5c7q3", "34.16 Supplier database includes the option to blacklist suppliers who are in breach of Code of Conduct or are not performing as per agreement."),
    ("a5c7q4", "34.17 NS has up-to-date pre-agreements with suppliers to be able to immediately access supplies and/or services necessary for humanitarian response."),
    ("a5c8q0", "34.18 NS has a fleet manual including road safety and security vehicle management and maintenance insurance and registration and staff are familiar with content."),
    ("a5c8q1", "34.19 NS vehicles are insured and their use is fully documented through the use of logbooks maintenance records fuel checks etc."),
    ("a5c8q2", "34.20 NS has sufficient and appropriate vehicles (i.e. 4x4 or trucks) owned or contracted for disaster response."),
    ("a5c8q3", "34.21 NS vehicles are fitted with seatbelts fire extinguishers and first aid kits and there is a clear and enforced policy on no weapons in vehicles."),
    ("a5c8q4", "34.22 NS only uses licensed mechanics (or workshops) for its vehicle maintenance."),
    ("a5c8q5", "34.23 NS has documented procedures for recording and reporting of accidents and insurance claims."),
    ("a5c8q6", "34.24 NS has mapped in-country resources to rent or borrow vehicles and/or drivers."),
    ("a5c8q7", "34.25 NS drivers are regularly tested and have valid licenses for the types of vehicles they are driving."),
    ("a5c8q8", "34.26 NS drivers are trained in First Aid defensive driving and Safer Access."),
    ("a5c8q9", "34.27 NS has documented procedures to induct and test new drivers."),
    ("a5c8q10", "34.28 NS has emergency procedures to guide the hours for drivers including non-standard hours and compensation."),
    ("a5c9q0", "34.29 NS has an approved warehouse and stock management manual with standard forms and templates."),
    ("a5c9q1", "34.30 Relevant staff and volunteers are trained on the procedures and use of forms."),
    ("a5c9q2", "34.31 NS has a secure dedicated and appropriate space with 24/7 access to receive store and dispatch relief supplies and response equipment sufficient to cover target number of households as per its response plan."),
    ("a5c9q3", "34.32 NS has storage space (owned rented or shared with other organisations) near high-risk communities accessible during disasters."),
    ("a5c9q4", "Component 34 performance"),
    ("a5c10q0", "35.1 Responders are deployed and equipped according to ToRs."),
    ("a5c10q1", "35.2 NS has learning paths for responders to obtain required qualifications and skills according to competencies and role profiles."),
    ("a5c10q2", "35.3 Responders are trained in quality and accountability standards (Sphere Code of Conduct etc...) around the protection sexual abuse exploitation child protection gender-based violence and other forms of abuse."),
    ("a5c10q3", "35.4 Responders have official updated ID recognised by authorities and appropriate visibility items."),
    ("a5c10q4", "35.5 Responders are regularly briefed on safety and security risks and are appropriately insured."),
    ("a5c10q5", "35.6 Procedures exist to activate deploy and manage branch and national response teams."),
    ("a5c10q6", "35.7 NS has an accessible up-to-date database of responders contacts and capacities at branch and HQ level."),
    ("a5c10q7", "35.8 NS incorporates response volunteers from relevant sectors to maintain a diverse workforce."),
    ("a5c10q8", "35.9 NS has expedited procedures to incorporate spontaneous volunteers during emergencies which meet minimum screening procedures and comply with its volunteer in emergency policy."),
    ("a5c10q9", "35.10 NS has HR procedures to scale-up and down (recruitment retention) and procedures for appreciation of volunteers during emergencies."),
    ("a5c10q10", "35.11 NS has a formal personnel rotation and retention strategy for response."),
    ("a5c10q11", "35.12 For scenarios that entail safety and/or security concerns for staff and volunteers a specific Safer Access analysis is conducted."),
    ("a5c10q12", "35.13 Training on self-care violence and harassment in the workplace is completed regularly and psychosocial support is available for staff and volunteers during and after emergencies and crises."),
    ("a5c10q13", "35.14 NS has a policy to cover responders' expenses incurred during emergencies."),
    ("a5c10q14", "35.15 The Code of Conduct is signed by all NS staff and volunteers."),
    ("a5c10q15", "Component 35 performance"),
    ("a5c11q0", "36.1 Communications focal points are identified and trained at headquarters and branch level."),
    ("a5c11q1", "36.2 An official spokesperson is designated in an emergency."),
    ("a5c11q2", "36.3 NS uses public and social media to draw attention to unmet needs and rights of affected people."),
    ("a5c11q3", "36.4 Standard templates for communication are available."),
    ("a5c11q4", "36.5 External communication plan is available and implemented and NS provides information to public on emergency situation within 24 hours."),
    ("a5c11q5", "36.6 Key messages and public awareness messages in an emergency are developed and shared with staff regularly."),
    ("a5c11q6", "36.7 NS has capacity to track negative media and social media and react accordingly."),
    ("a5c11q7", "36.8 NS coordinates with IFRC/ICRC on joint communication (SMCC)."),
    ("a5c11q8", "36.9 NS has a social networking policy and guidelines to ensure appropriate conduct of staff and volunteers."),
    ("a5c11q9", "36.10 NS has capacity to generate evidence-based results/messages to advocate targeted audiences i.e. decision makers and communities."),
    ("a5c11q10", "Component 36 performance"),
    ("a5c12q0", "37.1 Key staff are familiar with resource mobilisation options for humanitarian operations."),
    ("a5c12q1", "37.2 NS mobilises resources for its preparedness activities."),
    ("a5c12q2", "37.3 NS has a resource mobilisation strategy based on the response strategy available funds and the scale of need."),
    ("a5c12q3", "37.4 NS has agreements and mechanisms for collaboration and fundraising with the private sector."),
    ("a5c12q4", "37.5 Branches in highly vulnerable areas have a resource mobilisation plan."),
    ("a5c12q5", "37.6 NS has established a national emergency fund with criteria for proper use."),
    ("a5c12q6", "37.7 A resource mobilisation focal point is involved in emergency operations coordination."),
    ("a5c12q7", "37.8 NS resource mobilisation has established pre-disaster agreements with partners and donors."),
    ("a5c12q8", "37.9 NS has agreed procedures across departments (technical teams and support services) to communicate changes and report on outcomes of resources provided."),
    ("a5c12q9", "37.10 NS has a platform (phone number bank account online etc.) to accept national and/or international donations within 48 hours of an emergency."),
    ("a5c12q10", "37.11 NS has a pre-defined list of acceptable in-kind donations and complies in an emergency to mitigate image or reputational risks."),
    ("a5c12q11", "37.12 NS has a donation tracking system and works with the IFRC on joint operational shared services platforms (Mob table etc.).NS has a donation tracking system and works with the IFRC on joint operational shared services platforms (Mob table etc.)."),
    ("a5c12q12", "Component 37 performance"),
];
